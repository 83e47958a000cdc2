//! # Repository Module
//!
//! Database repository implementations for Shopfront.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Repository per Table                             │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.products().update(id, "Widget", price)                     │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list_all(&self)                                                   │
//! │  ├── get_by_id(&self, id)          → Option<T> (absent ≠ error)        │
//! │  ├── create(&self, ...)            → insert, rowid, re-read            │
//! │  ├── update(&self, id, ...)        → rows_affected guard, re-read      │
//! │  └── delete(&self, id)             → rows removed (0 or 1)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  All three repositories share this shape. None of them holds state     │
//! │  beyond a clone of the pool.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - products
//! - [`OrderRepository`](order::OrderRepository) - orders, filter by username
//! - [`OrderItemRepository`](order_item::OrderItemRepository) - order items, filter by order

pub mod order;
pub mod order_item;
pub mod product;
