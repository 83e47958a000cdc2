//! # Order Repository
//!
//! Database operations for orders. Same shape as the product repository,
//! plus an equality filter on `username`.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use shop_core::{EntityId, Order};

const ENTITY: &str = "Order";

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Lists every order, ordered by id.
    pub async fn list_all(&self) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>("SELECT id, username FROM orders ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }

    /// Lists the orders owned by `username` (exact match).
    pub async fn list_by_username(&self, username: &str) -> DbResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT id, username
            FROM orders
            WHERE username = ?1
            ORDER BY id
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        debug!(username = %username, count = orders.len(), "Listed orders by username");
        Ok(orders)
    }

    /// Gets an order by its ID. `Ok(None)` when absent.
    pub async fn get_by_id(&self, id: EntityId) -> DbResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>("SELECT id, username FROM orders WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(order)
    }

    /// Inserts a new order for `username` and returns it as stored.
    pub async fn create(&self, username: &str) -> DbResult<Order> {
        debug!(username = %username, "Inserting order");

        let result = sqlx::query("INSERT INTO orders (username) VALUES (?1)")
            .bind(username)
            .execute(&self.pool)
            .await?;

        self.get_by_id(result.last_insert_rowid())
            .await?
            .ok_or_else(|| DbError::creation_failed(ENTITY))
    }

    /// Replaces the username of an existing order.
    ///
    /// `Err(DbError::UpdateFailed)` when no row has this id.
    pub async fn update(&self, id: EntityId, username: &str) -> DbResult<Order> {
        debug!(id = %id, username = %username, "Updating order");

        let result = sqlx::query("UPDATE orders SET username = ?2 WHERE id = ?1")
            .bind(id)
            .bind(username)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::update_failed(ENTITY, id));
        }

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::update_failed(ENTITY, id))
    }

    /// Deletes an order (and, via the schema, its items).
    ///
    /// Returns the number of orders removed: 0 or 1.
    pub async fn delete(&self, id: EntityId) -> DbResult<u64> {
        debug!(id = %id, "Deleting order");

        let result = sqlx::query("DELETE FROM orders WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
