//! Room Repository

use super::{BaseRepository, RepoError, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::{Room, RoomCreate, RoomUpdate};
use shared::util::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "room";

#[derive(Clone)]
pub struct RoomRepository {
    base: BaseRepository,
}

impl RoomRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find rooms of a variant, oldest first
    pub async fn find_by_variant(&self, variant_id: &str) -> RepoResult<Vec<Room>> {
        let variant_ref =
            make_thing("variant", strip_table_prefix("variant", variant_id)).to_string();
        let rooms: Vec<Room> = self
            .base
            .db()
            .query("SELECT * FROM room WHERE variant = $variant ORDER BY created_at ASC")
            .bind(("variant", variant_ref))
            .await?
            .take(0)?;
        Ok(rooms)
    }

    /// Find room by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Room>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let room: Option<Room> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(room)
    }

    /// Create a new room
    pub async fn create(&self, data: RoomCreate) -> RepoResult<Room> {
        let room = Room {
            id: None,
            variant: make_thing("variant", strip_table_prefix("variant", &data.variant)),
            name: data.name,
            area: data.area.unwrap_or(0.0),
            discount: data.discount,
            discount_enabled: data.discount_enabled.unwrap_or(false),
            waste_percent: data.waste_percent,
            notes: data.notes,
            created_at: now_millis(),
        };

        let created: Option<Room> = self.base.db().create(TABLE).content(room).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create room".to_string()))
    }

    /// Update a room
    pub async fn update(&self, id: &str, data: RoomUpdate) -> RepoResult<Room> {
        let pure_id = strip_table_prefix(TABLE, id);
        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Room {} not found", id)))?;

        let thing = make_thing(TABLE, pure_id);
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;

        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Room {} not found", id)))
    }

    /// Delete a room and its line items
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let pure_id = strip_table_prefix(TABLE, id);
        let thing = make_thing(TABLE, pure_id);
        let room_ref = thing.to_string();
        self.base
            .db()
            .query(
                r#"
                DELETE room_product WHERE room = $room;
                DELETE $thing;
                "#,
            )
            .bind(("room", room_ref))
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
