//! CSV-backed record store for orders.
//!
//! File layout is a wire contract: the header line names the fixed column
//! order, every other non-blank line is one record. External tools reading
//! the file must match it exactly.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::domain::{Order, OrderPatch};
use crate::error::{OrdrError, Result};

/// Expected header line of the orders file.
pub const HEADER: &str = "id,customer,item,qty,status,createdAt";

/// File-backed store for the order collection.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Create a store for the given orders file path.
    ///
    /// Nothing is touched on disk until an operation runs.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the orders file this store owns.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Idempotently guarantee the storage location exists.
    ///
    /// Creates the containing directory if absent and, if the orders file is
    /// absent, creates it containing only the header line.
    pub fn ensure_storage(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        if !self.path.exists() {
            fs::write(&self.path, format!("{}\n", HEADER))?;
            debug!("Created orders file at {}", self.path.display());
        }

        Ok(())
    }

    /// Read the entire collection in file order.
    ///
    /// The header line must match [`HEADER`] exactly; a mismatch aborts the
    /// read. Individual rows that fail to parse are dropped with a warning
    /// rather than failing the whole read.
    pub fn read_all(&self) -> Result<Vec<Order>> {
        self.ensure_storage()?;

        let text = fs::read_to_string(&self.path)?;
        parse_orders(&text)
    }

    /// Append one record line to the file.
    ///
    /// The caller is responsible for allocating a fresh id via [`next_id`]
    /// first; no collision check happens here.
    pub fn append(&self, order: &Order) -> Result<()> {
        self.ensure_storage()?;

        // The file may or may not already end in a newline.
        let text = fs::read_to_string(&self.path)?;
        let separator = if text.ends_with('\n') || text.is_empty() { "" } else { "\n" };

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        writeln!(file, "{}{}", separator, to_line(order))?;

        debug!("Appended order {} to {}", order.id, self.path.display());
        Ok(())
    }

    /// Merge a patch over the record with the given id and rewrite the file.
    ///
    /// Returns `Ok(None)` without writing when no record matches. The
    /// record's id and creation timestamp are preserved regardless of the
    /// patch contents.
    pub fn update(&self, id: u64, patch: &OrderPatch) -> Result<Option<Order>> {
        let mut orders = self.read_all()?;

        let Some(order) = orders.iter_mut().find(|o| o.id == id) else {
            return Ok(None);
        };

        order.apply(patch);
        let updated = order.clone();
        self.write_all(&orders)?;

        Ok(Some(updated))
    }

    /// Remove the record with the given id and rewrite the file.
    ///
    /// Returns whether a record was actually removed; the rewrite is skipped
    /// when the id was not found.
    pub fn delete(&self, id: u64) -> Result<bool> {
        let orders = self.read_all()?;

        let remaining: Vec<Order> = orders.iter().filter(|o| o.id != id).cloned().collect();
        if remaining.len() == orders.len() {
            return Ok(false);
        }

        self.write_all(&remaining)?;
        Ok(true)
    }

    /// Replace the file contents with the header plus one line per record,
    /// in the given order.
    pub fn write_all(&self, orders: &[Order]) -> Result<()> {
        self.ensure_storage()?;

        let mut file = File::create(&self.path)?;
        writeln!(file, "{}", HEADER)?;
        for order in orders {
            writeln!(file, "{}", to_line(order))?;
        }

        debug!("Rewrote {} with {} orders", self.path.display(), orders.len());
        Ok(())
    }
}

/// Return one greater than the maximum id present, or 1 for an empty
/// collection. Pure over the loaded collection; does not touch disk.
pub fn next_id(orders: &[Order]) -> u64 {
    orders.iter().map(|o| o.id).max().unwrap_or(0) + 1
}

/// Parse the full file text into records.
fn parse_orders(text: &str) -> Result<Vec<Order>> {
    let lines: Vec<&str> = text
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    let Some((header, rows)) = lines.split_first() else {
        return Ok(Vec::new());
    };

    if *header != HEADER {
        return Err(OrdrError::SchemaMismatch {
            found: (*header).to_string(),
        });
    }

    Ok(rows.iter().copied().filter_map(parse_line).collect())
}

/// Parse one record line, positionally. Returns None for rows whose numeric
/// fields do not parse.
fn parse_line(row: &str) -> Option<Order> {
    let fields: Vec<&str> = row.split(',').collect();
    let field = |i: usize| fields.get(i).copied().unwrap_or("");

    let id = match field(0).parse::<u64>() {
        Ok(id) => id,
        Err(_) => {
            warn!("Dropping order row with unparseable id: {:?}", row);
            return None;
        }
    };
    let qty = match field(3).parse::<u32>() {
        Ok(qty) => qty,
        Err(_) => {
            warn!("Dropping order row with unparseable qty: {:?}", row);
            return None;
        }
    };

    Some(Order {
        id,
        customer: field(1).to_string(),
        item: field(2).to_string(),
        qty,
        status: field(4).to_string(),
        created_at: field(5).to_string(),
    })
}

/// Serialize one record as a comma-joined line in fixed column order.
fn to_line(order: &Order) -> String {
    format!(
        "{},{},{},{},{},{}",
        order.id, order.customer, order.item, order.qty, order.status, order.created_at
    )
}
