//! Offer Repository

use super::{BaseRepository, RepoError, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::{Offer, OfferCreate, OfferUpdate};
use shared::util::{now_millis, snowflake_id};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "offer";

#[derive(Clone)]
pub struct OfferRepository {
    base: BaseRepository,
}

impl OfferRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all offers, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Offer>> {
        let offers: Vec<Offer> = self
            .base
            .db()
            .query("SELECT * FROM offer ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(offers)
    }

    /// Find offer by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Offer>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let offer: Option<Offer> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(offer)
    }

    /// Find offer by document number
    pub async fn find_by_number(&self, number: i64) -> RepoResult<Option<Offer>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM offer WHERE number = $number LIMIT 1")
            .bind(("number", number))
            .await?;
        let offers: Vec<Offer> = result.take(0)?;
        Ok(offers.into_iter().next())
    }

    /// Create a new offer
    pub async fn create(&self, data: OfferCreate) -> RepoResult<Offer> {
        let number = data.number.unwrap_or_else(snowflake_id);

        // Check duplicate number
        if self.find_by_number(number).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Offer number {} already exists",
                number
            )));
        }

        let offer = Offer {
            id: None,
            number,
            phase: make_thing("phase", strip_table_prefix("phase", &data.phase)),
            client: data
                .client
                .as_deref()
                .map(|c| make_thing("client", strip_table_prefix("client", c))),
            issue_date: data.issue_date,
            valid_until: data.valid_until,
            notes: data.notes,
            created_at: now_millis(),
        };

        let created: Option<Offer> = self.base.db().create(TABLE).content(offer).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create offer".to_string()))
    }

    /// Update an offer
    pub async fn update(&self, id: &str, data: OfferUpdate) -> RepoResult<Offer> {
        let pure_id = strip_table_prefix(TABLE, id);
        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Offer {} not found", id)))?;

        let thing = make_thing(TABLE, pure_id);
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;

        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Offer {} not found", id)))
    }

    /// Delete an offer
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let pure_id = strip_table_prefix(TABLE, id);
        let thing = make_thing(TABLE, pure_id);
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
