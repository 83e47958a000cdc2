//! # HTTP Handlers
//!
//! One module per resource. Every handler follows the same recipe:
//!
//! ```text
//! get     → get_by_id ─── None ──► 404
//! update  → get_by_id ─── None ──► 404, else repository.update ──► 200
//! delete  → get_by_id ─── None ──► 404, else repository.delete ──► 200 + count
//! create  → repository.create ──────────────────────────────────► 201
//! ```
//!
//! Handlers hold no logic beyond that pre-check and the status mapping.
//!
//! ## DTOs
//! Entities cross the wire as camelCase DTOs, decoupled from the
//! `shop-core` types the repositories return.

pub mod health;
pub mod order_items;
pub mod orders;
pub mod products;
