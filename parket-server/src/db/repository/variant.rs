//! Variant Repository

use super::{BaseRepository, RepoError, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::{Variant, VariantCreate, VariantUpdate};
use shared::util::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "variant";

#[derive(Clone)]
pub struct VariantRepository {
    base: BaseRepository,
}

impl VariantRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find variants of a phase, oldest first
    pub async fn find_by_phase(&self, phase_id: &str) -> RepoResult<Vec<Variant>> {
        let phase_ref = make_thing("phase", strip_table_prefix("phase", phase_id)).to_string();
        let variants: Vec<Variant> = self
            .base
            .db()
            .query("SELECT * FROM variant WHERE phase = $phase ORDER BY created_at ASC")
            .bind(("phase", phase_ref))
            .await?
            .take(0)?;
        Ok(variants)
    }

    /// Find variant by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Variant>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let variant: Option<Variant> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(variant)
    }

    /// Create a new variant
    pub async fn create(&self, data: VariantCreate) -> RepoResult<Variant> {
        let variant = Variant {
            id: None,
            phase: make_thing("phase", strip_table_prefix("phase", &data.phase)),
            name: data.name,
            include_in_offer: data.include_in_offer.unwrap_or(true),
            variant_discount: data.variant_discount,
            architect_commission: data.architect_commission,
            notes: data.notes,
            created_at: now_millis(),
        };

        let created: Option<Variant> = self.base.db().create(TABLE).content(variant).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create variant".to_string()))
    }

    /// Update a variant
    pub async fn update(&self, id: &str, data: VariantUpdate) -> RepoResult<Variant> {
        let pure_id = strip_table_prefix(TABLE, id);
        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Variant {} not found", id)))?;

        let thing = make_thing(TABLE, pure_id);
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;

        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Variant {} not found", id)))
    }

    /// Delete a variant and its rooms
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let pure_id = strip_table_prefix(TABLE, id);
        let thing = make_thing(TABLE, pure_id);
        let variant_ref = thing.to_string();
        self.base
            .db()
            .query(
                r#"
                LET $rooms = (SELECT VALUE <string>id FROM room WHERE variant = $variant);
                DELETE room_product WHERE room IN $rooms;
                DELETE room WHERE variant = $variant;
                DELETE $thing;
                "#,
            )
            .bind(("variant", variant_ref))
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
