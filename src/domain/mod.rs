//! Domain types for ordr
//!
//! This module contains all core domain types:
//! - Order: the persisted order record
//! - OrderDraft: caller-supplied fields for a new order
//! - OrderPatch: explicit optional-field shape for partial updates

pub mod order;

pub use order::{DEFAULT_STATUS, Order, OrderDraft, OrderPatch};
