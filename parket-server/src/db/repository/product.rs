//! Catalog Product Repository

use super::{BaseRepository, RepoError, RepoResult, make_thing, strip_table_prefix};
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use crate::pricing::{bgn_to_eur, eur_to_bgn, sale_from_cost};
use shared::util::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "product";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all catalog products ordered by code
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product ORDER BY code ASC")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let pure_id = strip_table_prefix(TABLE, id);
        let product: Option<Product> = self.base.db().select((TABLE, pure_id)).await?;
        Ok(product)
    }

    /// Find product by article code
    pub async fn find_by_code(&self, code: &str) -> RepoResult<Option<Product>> {
        let code_owned = code.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM product WHERE code = $code LIMIT 1")
            .bind(("code", code_owned))
            .await?;
        let products: Vec<Product> = result.take(0)?;
        Ok(products.into_iter().next())
    }

    /// Create a new catalog product
    ///
    /// Missing cost fields are back-filled from the fixed EUR rate; when a
    /// markup is given, missing sale prices are derived from the costs.
    /// This is the only place the rate and the markup formula touch stored
    /// data.
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        // Check duplicate code
        if self.find_by_code(&data.code).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Product code '{}' already exists",
                data.code
            )));
        }

        let mut cost_eur = data.cost_eur;
        let mut cost_bgn = data.cost_bgn;
        if cost_bgn.is_none()
            && let Some(eur) = cost_eur
        {
            cost_bgn = Some(eur_to_bgn(eur));
        }
        if cost_eur.is_none()
            && let Some(bgn) = cost_bgn
        {
            cost_eur = Some(bgn_to_eur(bgn));
        }

        let mut sale_bgn = data.sale_bgn;
        let mut sale_eur = data.sale_eur;
        if let Some(markup) = data.markup {
            if sale_bgn.is_none()
                && let Some(cost) = cost_bgn
            {
                sale_bgn = sale_from_cost(cost, markup);
            }
            if sale_eur.is_none()
                && let Some(cost) = cost_eur
            {
                sale_eur = sale_from_cost(cost, markup);
            }
        }

        let product = Product {
            id: None,
            code: data.code,
            name: data.name,
            manufacturer: data.manufacturer,
            category: data.category,
            unit: data.unit,
            cost_eur,
            cost_bgn,
            markup: data.markup,
            sale_bgn,
            sale_eur,
            is_active: data.is_active.unwrap_or(true),
            created_at: now_millis(),
        };

        let created: Option<Product> = self.base.db().create(TABLE).content(product).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Update a catalog product
    ///
    /// Updates are stored as sent. Cost and sale derivations run at
    /// creation only; an edit that wants recomputed prices sends them.
    pub async fn update(&self, id: &str, data: ProductUpdate) -> RepoResult<Product> {
        let pure_id = strip_table_prefix(TABLE, id);
        let existing = self
            .find_by_id(pure_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))?;

        // Check duplicate code if changing
        if let Some(ref new_code) = data.code
            && new_code != &existing.code
            && self.find_by_code(new_code).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Product code '{}' already exists",
                new_code
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
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Delete a catalog product
    ///
    /// Existing room product lines keep their snapshotted price and
    /// description, so no cascade is needed.
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
