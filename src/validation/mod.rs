//! Input validation for order payloads.
//!
//! The store performs no validation of its own; everything a caller supplies
//! is coerced and checked here first. Strings are trimmed, required fields
//! must be non-empty, quantities must be positive, and no field may contain
//! the column separator or a newline since either would corrupt the line
//! format on disk.

use crate::domain::{DEFAULT_STATUS, OrderDraft, OrderPatch};
use crate::error::{OrdrError, Result};

/// Validate and coerce the fields of a new order.
///
/// `status` defaults to "processing" when absent or blank.
pub fn validate_draft(customer: &str, item: &str, qty: u32, status: Option<&str>) -> Result<OrderDraft> {
    let customer = required_field("customer", customer)?;
    let item = required_field("item", item)?;
    let qty = positive_qty(qty)?;

    let status = match status.map(str::trim) {
        Some(s) if !s.is_empty() => clean_field("status", s)?,
        _ => DEFAULT_STATUS.to_string(),
    };

    Ok(OrderDraft {
        customer,
        item,
        qty,
        status,
    })
}

/// Validate and coerce a partial update.
///
/// Each supplied slot gets the same checks as at creation; a patch with no
/// supplied slots is rejected as a no-op.
pub fn validate_patch(
    customer: Option<&str>,
    item: Option<&str>,
    qty: Option<u32>,
    status: Option<&str>,
) -> Result<OrderPatch> {
    let patch = OrderPatch {
        customer: customer.map(|v| required_field("customer", v)).transpose()?,
        item: item.map(|v| required_field("item", v)).transpose()?,
        qty: qty.map(positive_qty).transpose()?,
        status: status.map(|v| required_field("status", v)).transpose()?,
    };

    if patch.is_empty() {
        return Err(OrdrError::Validation("no fields to update".to_string()));
    }

    Ok(patch)
}

/// Trim a required text field and reject empty values.
fn required_field(name: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(OrdrError::Validation(format!("{} must not be empty", name)));
    }
    clean_field(name, trimmed)
}

/// Reject characters that would corrupt the line format.
fn clean_field(name: &str, value: &str) -> Result<String> {
    if value.contains(',') || value.contains('\n') || value.contains('\r') {
        return Err(OrdrError::Validation(format!(
            "{} must not contain commas or line breaks",
            name
        )));
    }
    Ok(value.to_string())
}

/// Reject a zero quantity.
fn positive_qty(qty: u32) -> Result<u32> {
    if qty == 0 {
        return Err(OrdrError::Validation("qty must be a positive integer".to_string()));
    }
    Ok(qty)
}
