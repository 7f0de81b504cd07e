//! Order record and related types
//!
//! An Order is the sole entity in ordr. The store assigns its id and stamps
//! its creation time; both are immutable afterwards. Partial updates go
//! through OrderPatch so the merge is exhaustive and statically checked
//! rather than driven by an untyped map.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Status given to new orders when the caller does not supply one.
pub const DEFAULT_STATUS: &str = "processing";

/// A single order record as persisted in the orders file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier, assigned by the store's allocator
    pub id: u64,

    /// Customer name
    pub customer: String,

    /// Ordered item
    pub item: String,

    /// Quantity ordered, always positive
    pub qty: u32,

    /// Free-form short status text ("processing", "shipped", "delivered", ...)
    pub status: String,

    /// Opaque creation timestamp, RFC 3339, stamped once at creation
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Order {
    /// Build a full record from a validated draft and a freshly allocated id.
    ///
    /// Stamps `created_at` with the current UTC time.
    pub fn create(id: u64, draft: OrderDraft) -> Self {
        Self {
            id,
            customer: draft.customer,
            item: draft.item,
            qty: draft.qty,
            status: draft.status,
            created_at: now_rfc3339(),
        }
    }

    /// Apply a patch, leaving `id` and `created_at` untouched.
    pub fn apply(&mut self, patch: &OrderPatch) {
        if let Some(customer) = &patch.customer {
            self.customer = customer.clone();
        }
        if let Some(item) = &patch.item {
            self.item = item.clone();
        }
        if let Some(qty) = patch.qty {
            self.qty = qty;
        }
        if let Some(status) = &patch.status {
            self.status = status.clone();
        }
    }
}

/// Caller-supplied fields for a new order, before id allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub customer: String,
    pub item: String,
    pub qty: u32,
    pub status: String,
}

/// Partial update for an existing order.
///
/// A `None` slot means "keep the existing value". There is deliberately no
/// slot for `id` or `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderPatch {
    pub customer: Option<String>,
    pub item: Option<String>,
    pub qty: Option<u32>,
    pub status: Option<String>,
}

impl OrderPatch {
    /// Returns true if no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.customer.is_none() && self.item.is_none() && self.qty.is_none() && self.status.is_none()
    }
}

/// Current UTC time as RFC 3339 text.
fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
