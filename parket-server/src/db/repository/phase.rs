//! Phase Repository

use super::{BaseRepository, RepoError, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::{Phase, PhaseCreate, PhaseUpdate};
use shared::util::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "phase";

#[derive(Clone)]
pub struct PhaseRepository {
    base: BaseRepository,
}

impl PhaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find phases of a project in display order
    pub async fn find_by_project(&self, project_id: &str) -> RepoResult<Vec<Phase>> {
        let project_ref =
            make_thing("project", strip_table_prefix("project", project_id)).to_string();
        let phases: Vec<Phase> = self
            .base
            .db()
            .query("SELECT * FROM phase WHERE project = $project ORDER BY sort_order ASC")
            .bind(("project", project_ref))
            .await?
            .take(0)?;
        Ok(phases)
    }

    /// Find phase by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Phase>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let phase: Option<Phase> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(phase)
    }

    /// Create a new phase
    pub async fn create(&self, data: PhaseCreate) -> RepoResult<Phase> {
        let phase = Phase {
            id: None,
            project: make_thing("project", strip_table_prefix("project", &data.project)),
            name: data.name,
            phase_discount: data.phase_discount,
            discount_enabled: data.discount_enabled.unwrap_or(false),
            include_architect_commission: data.include_architect_commission.unwrap_or(false),
            architect_commission_percent: data.architect_commission_percent,
            sort_order: data.sort_order.unwrap_or(0),
            notes: data.notes,
            created_at: now_millis(),
        };

        let created: Option<Phase> = self.base.db().create(TABLE).content(phase).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create phase".to_string()))
    }

    /// Update a phase
    pub async fn update(&self, id: &str, data: PhaseUpdate) -> RepoResult<Phase> {
        let pure_id = strip_table_prefix(TABLE, id);
        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Phase {} not found", id)))?;

        let thing = make_thing(TABLE, pure_id);
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;

        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Phase {} not found", id)))
    }

    /// Delete a phase and everything under it
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let pure_id = strip_table_prefix(TABLE, id);
        let thing = make_thing(TABLE, pure_id);
        let phase_ref = thing.to_string();
        self.base
            .db()
            .query(
                r#"
                LET $variants = (SELECT VALUE <string>id FROM variant WHERE phase = $phase);
                LET $rooms = (SELECT VALUE <string>id FROM room WHERE variant IN $variants);
                DELETE room_product WHERE room IN $rooms;
                DELETE room WHERE variant IN $variants;
                DELETE variant WHERE phase = $phase;
                DELETE $thing;
                "#,
            )
            .bind(("phase", phase_ref))
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
