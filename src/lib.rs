//! ordr - a CSV-backed order management tool
//!
//! The orders file is a makeshift database: a header line plus one
//! comma-joined line per record. The store module owns that file; domain and
//! validation provide the typed shapes callers feed it.

pub mod domain;
pub mod error;
pub mod store;
pub mod validation;

pub use error::{OrdrError, Result};
