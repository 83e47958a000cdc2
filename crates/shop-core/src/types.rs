//! # Domain Types
//!
//! The three entities exposed by Shopfront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │   OrderItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄┐ │  id             │◄──│  order_id       │       │
//! │  │  name           │ │ │  username       │   │  product_id ────┼──┐    │
//! │  │  price (Money)  │ │ └─────────────────┘   │  quantity       │  │    │
//! │  └─────────────────┘ │                       └─────────────────┘  │    │
//! │                      └────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity carries an `id` generated by the store (SQLite rowid).
//! It never changes once assigned and is the only key used for
//! update and delete.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Store-generated identifier shared by all entities.
pub type EntityId = i64;

// =============================================================================
// Product
// =============================================================================

/// A product that can be ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Store-generated identifier.
    pub id: EntityId,

    /// Display name.
    pub name: String,

    /// Unit price, persisted in the `price_cents` column.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "price_cents"))]
    pub price: Money,
}

// =============================================================================
// Order
// =============================================================================

/// An order placed by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    pub id: EntityId,
    /// Owner of the order. Set from the authenticated caller on create.
    pub username: String,
}

// =============================================================================
// Order Item
// =============================================================================

/// A line of an order: a product and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: EntityId,
    pub order_id: EntityId,
    pub product_id: EntityId,
    pub quantity: i32,
}

// =============================================================================
// Unit Tests
// =============================================================================
