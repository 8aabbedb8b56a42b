//! Supplier Order Repository

use super::{BaseRepository, RepoError, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::{Order, OrderCreate, OrderUpdate};
use shared::util::{now_millis, snowflake_id};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all orders, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let order: Option<Order> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(order)
    }

    /// Find order by document number
    pub async fn find_by_number(&self, number: i64) -> RepoResult<Option<Order>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM order WHERE number = $number LIMIT 1")
            .bind(("number", number))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        Ok(orders.into_iter().next())
    }

    /// Create a new order
    ///
    /// The document number is generated when the payload does not carry
    /// one. Status fields start at their workflow defaults unless set.
    pub async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        let number = data.number.unwrap_or_else(snowflake_id);

        // Check duplicate number
        if self.find_by_number(number).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Order number {} already exists",
                number
            )));
        }

        let order = Order {
            id: None,
            number,
            client: data
                .client
                .as_deref()
                .map(|c| make_thing("client", strip_table_prefix("client", c))),
            project: data
                .project
                .as_deref()
                .map(|p| make_thing("project", strip_table_prefix("project", p))),
            supplier: data.supplier,
            description: data.description,
            amount: data.amount,
            confirmation_status: data.confirmation_status.unwrap_or_default(),
            payment_status: data.payment_status.unwrap_or_default(),
            delivery_status: data.delivery_status.unwrap_or_default(),
            expected_delivery: data.expected_delivery,
            notes: data.notes,
            created_at: now_millis(),
        };

        let created: Option<Order> = self.base.db().create(TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Update an order
    pub async fn update(&self, id: &str, data: OrderUpdate) -> RepoResult<Order> {
        let pure_id = strip_table_prefix(TABLE, id);
        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))?;

        let thing = make_thing(TABLE, pure_id);
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;

        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }

    /// Delete an order
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
