//! # shop-core: Domain Types for Shopfront
//!
//! Entity types for the three resources served by the API, plus the
//! integer [`Money`] type used for product prices.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    shop-api (axum handlers)                     │   │
//! │  │    /api/products, /api/orders, /api/order-items                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  Product  │  │   Order   │  │ OrderItem │  │   Money   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shop-db (Database Layer)                     │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity types (Product, Order, OrderItem)
//! - [`money`] - Money type with integer arithmetic
//!
//! ## Example Usage
//!
//! ```rust
//! use shop_core::money::Money;
//!
//! let price = Money::from_cents(999);
//! assert_eq!(price.to_string(), "$9.99");
//! ```

pub mod money;
pub mod types;

// These allow users to do `use shop_core::Money` instead of
// `use shop_core::money::Money`
pub use money::Money;
pub use types::*;
