//! # Order Item Repository
//!
//! Database operations for order items. Same shape as the product
//! repository, plus an equality filter on `order_id`.
//!
//! `order_id` and `product_id` are not checked here; the schema's foreign
//! keys reject dangling references with `DbError::ForeignKeyViolation`.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use shop_core::{EntityId, OrderItem};

const ENTITY: &str = "Order item";

/// Repository for order item database operations.
#[derive(Debug, Clone)]
pub struct OrderItemRepository {
    pool: SqlitePool,
}

impl OrderItemRepository {
    /// Creates a new OrderItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderItemRepository { pool }
    }

    /// Lists every order item, ordered by id.
    pub async fn list_all(&self) -> DbResult<Vec<OrderItem>> {
        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT id, order_id, product_id, quantity
            FROM order_items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = items.len(), "Listed order items");
        Ok(items)
    }

    /// Lists the items of one order.
    pub async fn list_by_order_id(&self, order_id: EntityId) -> DbResult<Vec<OrderItem>> {
        let items = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT id, order_id, product_id, quantity
            FROM order_items
            WHERE order_id = ?1
            ORDER BY id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(order_id = %order_id, count = items.len(), "Listed order items by order");
        Ok(items)
    }

    /// Gets an order item by its ID. `Ok(None)` when absent.
    pub async fn get_by_id(&self, id: EntityId) -> DbResult<Option<OrderItem>> {
        let item = sqlx::query_as::<_, OrderItem>(
            r#"
            SELECT id, order_id, product_id, quantity
            FROM order_items
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Inserts a new order item and returns it as stored.
    pub async fn create(
        &self,
        order_id: EntityId,
        product_id: EntityId,
        quantity: i32,
    ) -> DbResult<OrderItem> {
        debug!(
            order_id = %order_id,
            product_id = %product_id,
            quantity = %quantity,
            "Inserting order item"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO order_items (order_id, product_id, quantity)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(order_id)
        .bind(product_id)
        .bind(quantity)
        .execute(&self.pool)
        .await?;

        self.get_by_id(result.last_insert_rowid())
            .await?
            .ok_or_else(|| DbError::creation_failed(ENTITY))
    }

    /// Replaces every field of an existing order item.
    pub async fn update(
        &self,
        id: EntityId,
        order_id: EntityId,
        product_id: EntityId,
        quantity: i32,
    ) -> DbResult<OrderItem> {
        debug!(id = %id, "Updating order item");

        let result = sqlx::query(
            r#"
            UPDATE order_items SET
                order_id = ?2,
                product_id = ?3,
                quantity = ?4
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(order_id)
        .bind(product_id)
        .bind(quantity)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::update_failed(ENTITY, id));
        }

        self.get_by_id(id)
            .await?
            .ok_or_else(|| DbError::update_failed(ENTITY, id))
    }

    /// Deletes an order item. Returns the number of rows removed: 0 or 1.
    pub async fn delete(&self, id: EntityId) -> DbResult<u64> {
        debug!(id = %id, "Deleting order item");

        let result = sqlx::query("DELETE FROM order_items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use shop_core::Money;

    /// Database with one product and two orders: (db, product_id, [order_a, order_b]).
    async fn fixture() -> (Database, EntityId, [EntityId; 2]) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let product = db
            .products()
            .create("Widget", Money::from_cents(999))
            .await
            .unwrap();
        let a = db.orders().create("alice").await.unwrap();
        let b = db.orders().create("bob").await.unwrap();
        (db, product.id, [a.id, b.id])
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let (db, product_id, [order_id, _]) = fixture().await;
        let repo = db.order_items();

        let item = repo.create(order_id, product_id, 3).await.unwrap();
        assert_eq!(item.order_id, order_id);
        assert_eq!(item.product_id, product_id);
        assert_eq!(item.quantity, 3);

        assert_eq!(repo.get_by_id(item.id).await.unwrap(), Some(item));
    }

    #[tokio::test]
    async fn test_list_by_order_id() {
        let (db, product_id, [a, b]) = fixture().await;
        let repo = db.order_items();

        let a1 = repo.create(a, product_id, 1).await.unwrap();
        let b1 = repo.create(b, product_id, 2).await.unwrap();
        let a2 = repo.create(a, product_id, 5).await.unwrap();

        assert_eq!(repo.list_by_order_id(a).await.unwrap(), vec![a1.clone(), a2.clone()]);
        assert_eq!(repo.list_by_order_id(b).await.unwrap(), vec![b1.clone()]);
        assert!(repo.list_by_order_id(999).await.unwrap().is_empty());
        assert_eq!(repo.list_all().await.unwrap(), vec![a1, b1, a2]);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let (db, product_id, [a, b]) = fixture().await;
        let repo = db.order_items();
        let item = repo.create(a, product_id, 1).await.unwrap();

        let updated = repo.update(item.id, b, product_id, 9).await.unwrap();

        assert_eq!(updated.id, item.id);
        assert_eq!(updated.order_id, b);
        assert_eq!(updated.quantity, 9);
        assert_eq!(repo.get_by_id(item.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_fails() {
        let (db, product_id, [a, _]) = fixture().await;

        let err = db.order_items().update(77, a, product_id, 1).await.unwrap_err();
        assert!(matches!(err, DbError::UpdateFailed { .. }));
    }

    #[tokio::test]
    async fn test_delete_removes_item_not_product() {
        let (db, product_id, [a, _]) = fixture().await;
        let repo = db.order_items();
        let item = repo.create(a, product_id, 1).await.unwrap();

        assert_eq!(repo.delete(item.id).await.unwrap(), 1);
        assert_eq!(repo.get_by_id(item.id).await.unwrap(), None);
        assert_eq!(repo.delete(item.id).await.unwrap(), 0);

        // The referenced product is untouched
        assert!(db.products().get_by_id(product_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_dangling_references_are_rejected() {
        let (db, product_id, [a, _]) = fixture().await;
        let repo = db.order_items();

        let err = repo.create(999, product_id, 1).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));

        let err = repo.create(a, 999, 1).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_referenced_product_cannot_be_deleted() {
        let (db, product_id, [a, _]) = fixture().await;
        db.order_items().create(a, product_id, 1).await.unwrap();

        let err = db.products().delete(product_id).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_deleting_order_removes_its_items() {
        let (db, product_id, [a, b]) = fixture().await;
        let repo = db.order_items();
        repo.create(a, product_id, 1).await.unwrap();
        let kept = repo.create(b, product_id, 2).await.unwrap();

        assert_eq!(db.orders().delete(a).await.unwrap(), 1);

        assert_eq!(repo.list_all().await.unwrap(), vec![kept]);
    }
}
