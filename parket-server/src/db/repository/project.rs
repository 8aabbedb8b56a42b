//! Project Repository

use super::{BaseRepository, RepoError, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::{Project, ProjectCreate, ProjectUpdate};
use shared::util::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "project";

#[derive(Clone)]
pub struct ProjectRepository {
    base: BaseRepository,
}

impl ProjectRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all projects, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Project>> {
        let projects: Vec<Project> = self
            .base
            .db()
            .query("SELECT * FROM project ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(projects)
    }

    /// Find projects belonging to a client, newest first
    pub async fn find_by_client(&self, client_id: &str) -> RepoResult<Vec<Project>> {
        let client_ref = make_thing("client", strip_table_prefix("client", client_id)).to_string();
        let projects: Vec<Project> = self
            .base
            .db()
            .query("SELECT * FROM project WHERE client = $client ORDER BY created_at DESC")
            .bind(("client", client_ref))
            .await?
            .take(0)?;
        Ok(projects)
    }

    /// Find project by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Project>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let project: Option<Project> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(project)
    }

    /// Create a new project
    pub async fn create(&self, data: ProjectCreate) -> RepoResult<Project> {
        let project = Project {
            id: None,
            client: make_thing("client", strip_table_prefix("client", &data.client)),
            name: data.name,
            site_address: data.site_address,
            architect: data.architect,
            notes: data.notes,
            created_at: now_millis(),
        };

        let created: Option<Project> = self.base.db().create(TABLE).content(project).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create project".to_string()))
    }

    /// Update a project
    pub async fn update(&self, id: &str, data: ProjectUpdate) -> RepoResult<Project> {
        let pure_id = strip_table_prefix(TABLE, id);
        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Project {} not found", id)))?;

        let thing = make_thing(TABLE, pure_id);
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;

        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Project {} not found", id)))
    }

    /// Delete a project and everything under it
    ///
    /// Cascade order matters: lines first, then rooms, variants, phases,
    /// finally the project itself.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let pure_id = strip_table_prefix(TABLE, id);
        let thing = make_thing(TABLE, pure_id);
        let project_ref = thing.to_string();
        self.base
            .db()
            .query(
                r#"
                LET $phases = (SELECT VALUE <string>id FROM phase WHERE project = $project);
                LET $variants = (SELECT VALUE <string>id FROM variant WHERE phase IN $phases);
                LET $rooms = (SELECT VALUE <string>id FROM room WHERE variant IN $variants);
                DELETE room_product WHERE room IN $rooms;
                DELETE room WHERE variant IN $variants;
                DELETE variant WHERE phase IN $phases;
                DELETE phase WHERE project = $project;
                DELETE $thing;
                "#,
            )
            .bind(("project", project_ref))
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
