//! Room Product Repository

use super::{BaseRepository, RepoError, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::{Product, RoomProduct, RoomProductCreate, RoomProductUpdate};
use shared::util::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "room_product";

#[derive(Clone)]
pub struct RoomProductRepository {
    base: BaseRepository,
}

impl RoomProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find line items of a room, oldest first
    pub async fn find_by_room(&self, room_id: &str) -> RepoResult<Vec<RoomProduct>> {
        let room_ref = make_thing("room", strip_table_prefix("room", room_id)).to_string();
        let lines: Vec<RoomProduct> = self
            .base
            .db()
            .query("SELECT * FROM room_product WHERE room = $room ORDER BY created_at ASC")
            .bind(("room", room_ref))
            .await?
            .take(0)?;
        Ok(lines)
    }

    /// Find line item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<RoomProduct>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let line: Option<RoomProduct> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(line)
    }

    /// Create a new line item
    ///
    /// When the line references a catalog product, missing description,
    /// unit and unit price are copied from the catalog record. The copy
    /// happens once here; later catalog edits leave the line untouched.
    pub async fn create(&self, data: RoomProductCreate) -> RepoResult<RoomProduct> {
        let mut description = data.description;
        let mut unit = data.unit;
        let mut unit_price = data.unit_price;

        let product = match data.product.as_deref() {
            Some(product_id) => {
                let pure_id = strip_table_prefix("product", product_id);
                let catalog: Option<Product> =
                    self.base.db().select(("product", pure_id)).await?;
                let catalog = catalog.ok_or_else(|| {
                    RepoError::NotFound(format!("Product {} not found", product_id))
                })?;

                if description.is_none() {
                    description = Some(catalog.name);
                }
                if unit.is_none() {
                    unit = catalog.unit;
                }
                if unit_price.is_none() {
                    unit_price = catalog.sale_bgn;
                }
                Some(make_thing("product", pure_id))
            }
            None => None,
        };

        let line = RoomProduct {
            id: None,
            room: make_thing("room", strip_table_prefix("room", &data.room)),
            product,
            description,
            quantity: data.quantity,
            unit,
            unit_price,
            discount: data.discount,
            waste_percent: data.waste_percent,
            created_at: now_millis(),
        };

        let created: Option<RoomProduct> = self.base.db().create(TABLE).content(line).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create room product".to_string()))
    }

    /// Update a line item
    pub async fn update(&self, id: &str, data: RoomProductUpdate) -> RepoResult<RoomProduct> {
        let pure_id = strip_table_prefix(TABLE, id);
        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Room product {} not found", id)))?;

        let thing = make_thing(TABLE, pure_id);
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;

        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Room product {} not found", id)))
    }

    /// Delete a line item
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
