//! Client Repository

use super::{BaseRepository, RepoError, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::{Client, ClientCreate, ClientUpdate};
use shared::util::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "client";

#[derive(Clone)]
pub struct ClientRepository {
    base: BaseRepository,
}

impl ClientRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all clients ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<Client>> {
        let clients: Vec<Client> = self
            .base
            .db()
            .query("SELECT * FROM client ORDER BY name ASC")
            .await?
            .take(0)?;
        Ok(clients)
    }

    /// Find client by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Client>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let client: Option<Client> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(client)
    }

    /// Find client by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Client>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM client WHERE name = $name LIMIT 1")
            .bind(("name", name_owned))
            .await?;
        let clients: Vec<Client> = result.take(0)?;
        Ok(clients.into_iter().next())
    }

    /// Whether any project still references this client
    pub async fn has_projects(&self, id: &str) -> RepoResult<bool> {
        let client_ref = make_thing(TABLE, strip_table_prefix(TABLE, id)).to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT VALUE <string>id FROM project WHERE client = $client LIMIT 1")
            .bind(("client", client_ref))
            .await?;
        let ids: Vec<String> = result.take(0)?;
        Ok(!ids.is_empty())
    }

    /// Create a new client
    pub async fn create(&self, data: ClientCreate) -> RepoResult<Client> {
        // Check duplicate name
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Client '{}' already exists",
                data.name
            )));
        }

        let client = Client {
            id: None,
            name: data.name,
            contact_person: data.contact_person,
            phone: data.phone,
            email: data.email,
            address: data.address,
            notes: data.notes,
            created_at: now_millis(),
        };

        let created: Option<Client> = self.base.db().create(TABLE).content(client).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create client".to_string()))
    }

    /// Update a client
    pub async fn update(&self, id: &str, data: ClientUpdate) -> RepoResult<Client> {
        let pure_id = strip_table_prefix(TABLE, id);
        let existing = self
            .find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Client {} not found", id)))?;

        // Check duplicate name if changing
        if let Some(ref new_name) = data.name
            && new_name != &existing.name
            && self.find_by_name(new_name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Client '{}' already exists",
                new_name
            )));
        }

        let thing = make_thing(TABLE, pure_id);
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;

        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Client {} not found", id)))
    }

    /// Delete a client; refused while projects still reference it
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let pure_id = strip_table_prefix(TABLE, id);
        if self.has_projects(pure_id).await? {
            return Err(RepoError::Validation(
                "Client has existing projects".to_string(),
            ));
        }

        let thing = make_thing(TABLE, pure_id);
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
