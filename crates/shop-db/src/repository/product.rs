//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Write Then Re-read
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    create("Widget", $9.99)                              │
//! │                                                                         │
//! │  INSERT INTO products (name, price_cents) VALUES (?, ?)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  last_insert_rowid() = 17                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SELECT ... WHERE id = 17                                              │
//! │       │                                                                 │
//! │       ├── Some(row) → Ok(Product { id: 17, ... })                      │
//! │       └── None      → Err(DbError::CreationFailed)                     │
//! │                                                                         │
//! │  The two statements are not one transaction: a concurrent delete       │
//! │  in between surfaces as CreationFailed.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use shop_core::{EntityId, Money, Product};

const ENTITY: &str = "Product";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let widget = repo.create("Widget", Money::from_cents(999)).await?;
/// let same = repo.get_by_id(widget.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists every product, ordered by id.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price_cents
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: EntityId) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price_cents
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a new product and returns it as stored.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Stored product with its generated id
    /// * `Err(DbError::CreationFailed)` - Row could not be read back
    pub async fn create(&self, name: &str, price: Money) -> DbResult<Product> {
        debug!(name = %name, price = %price, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, price_cents)
            VALUES (?1, ?2)
            "#,
        )
        .bind(name)
        .bind(price)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::creation_failed(ENTITY))
    }

    /// Replaces every field of an existing product.
    ///
    /// Callers are expected to check existence first; the row-count check
    /// here is a second guard.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Product as stored after the update
    /// * `Err(DbError::UpdateFailed)` - No row with this id
    pub async fn update(&self, id: EntityId, name: &str, price: Money) -> DbResult<Product> {
        debug!(id = %id, name = %name, price = %price, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                price_cents = ?3
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(price)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::update_failed(ENTITY, id));
        }

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::update_failed(ENTITY, id))
    }

    /// Deletes a product.
    ///
    /// ## Returns
    /// Number of rows removed: 1 if the product existed, 0 otherwise.
    pub async fn delete(&self, id: EntityId) -> DbResult<u64> {
        debug!(id = %id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Counts total products (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
