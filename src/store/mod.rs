//! Storage layer for ordr - CSV-file-backed persistence.
//!
//! The orders file is the database: one header line followed by one
//! comma-joined line per record. Creates append; updates and deletes rewrite
//! the whole file. There is no locking; the design assumes a single writer
//! at a time.

mod csv;

pub use csv::{CsvStore, HEADER, next_id};
