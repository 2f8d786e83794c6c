//! Confirmed order records kept in session history.

use serde::{Deserialize, Serialize};

use brgrr_core::{BaseId, Breakdown, ToppingId};

/// A committed, timestamped, user-attributed configuration snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Selected bun.
    #[serde(rename = "bun")]
    pub base: BaseId,
    /// Toppings in catalog order, no duplicates.
    pub toppings: Vec<ToppingId>,
    /// Subtotal, tax and total at confirmation time.
    #[serde(flatten)]
    pub price: Breakdown,
    /// Name of the logged-in user, or `"Guest"`.
    pub username: String,
    /// Confirmation time in epoch milliseconds.
    pub timestamp: i64,
}
