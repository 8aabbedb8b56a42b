//! Invoice Repository

use super::{BaseRepository, RepoError, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::{Invoice, InvoiceCreate, InvoiceUpdate};
use shared::util::{now_millis, snowflake_id};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "invoice";

#[derive(Clone)]
pub struct InvoiceRepository {
    base: BaseRepository,
}

impl InvoiceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all invoices, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Invoice>> {
        let invoices: Vec<Invoice> = self
            .base
            .db()
            .query("SELECT * FROM invoice ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(invoices)
    }

    /// Find invoices attached to an order, newest first
    pub async fn find_by_order(&self, order_id: &str) -> RepoResult<Vec<Invoice>> {
        let order_ref = make_thing("order", strip_table_prefix("order", order_id)).to_string();
        let invoices: Vec<Invoice> = self
            .base
            .db()
            .query("SELECT * FROM invoice WHERE order = $order ORDER BY created_at DESC")
            .bind(("order", order_ref))
            .await?
            .take(0)?;
        Ok(invoices)
    }

    /// Find invoice by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Invoice>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let invoice: Option<Invoice> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(invoice)
    }

    /// Find invoice by document number
    pub async fn find_by_number(&self, number: i64) -> RepoResult<Option<Invoice>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM invoice WHERE number = $number LIMIT 1")
            .bind(("number", number))
            .await?;
        let invoices: Vec<Invoice> = result.take(0)?;
        Ok(invoices.into_iter().next())
    }

    /// Create a new invoice
    pub async fn create(&self, data: InvoiceCreate) -> RepoResult<Invoice> {
        let number = data.number.unwrap_or_else(snowflake_id);

        // Check duplicate number
        if self.find_by_number(number).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Invoice number {} already exists",
                number
            )));
        }

        let invoice = Invoice {
            id: None,
            number,
            order: data
                .order
                .as_deref()
                .map(|o| make_thing("order", strip_table_prefix("order", o))),
            client: data
                .client
                .as_deref()
                .map(|c| make_thing("client", strip_table_prefix("client", c))),
            issue_date: data.issue_date,
            amount: data.amount,
            paid: data.paid.unwrap_or(false),
            notes: data.notes,
            created_at: now_millis(),
        };

        let created: Option<Invoice> = self.base.db().create(TABLE).content(invoice).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create invoice".to_string()))
    }

    /// Update an invoice
    pub async fn update(&self, id: &str, data: InvoiceUpdate) -> RepoResult<Invoice> {
        let pure_id = strip_table_prefix(TABLE, id);
        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Invoice {} not found", id)))?;

        let thing = make_thing(TABLE, pure_id);
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;

        self.find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Invoice {} not found", id)))
    }

    /// Delete an invoice
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
