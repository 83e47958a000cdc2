//! # shop-db: Database Layer for Shopfront
//!
//! SQLite access for products, orders and order items, using sqlx for
//! async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Data Flow                              │
//! │                                                                         │
//! │  HTTP handler (PUT /api/products/{id})                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     shop-db (THIS CRATE)                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────────┐  ┌────────────┐  │   │
//! │  │   │   Database    │    │   Repositories    │  │ Migrations │  │   │
//! │  │   │   (pool.rs)   │    │                   │  │ (embedded) │  │   │
//! │  │   │               │    │ ProductRepository │  │            │  │   │
//! │  │   │ SqlitePool    │◄───│ OrderRepository   │  │ 001_...sql │  │   │
//! │  │   │               │    │ OrderItemRepo...  │  │            │  │   │
//! │  │   └───────────────┘    └───────────────────┘  └────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shop_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("shopfront.db")).await?;
//!
//! let product = db.products().create("Widget", Money::from_cents(999)).await?;
//! let found = db.products().get_by_id(product.id).await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::order::OrderRepository;
pub use repository::order_item::OrderItemRepository;
pub use repository::product::ProductRepository;
