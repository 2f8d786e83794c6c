//! Saved favorite configurations.

use serde::{Deserialize, Serialize};

use brgrr_core::{BaseId, Breakdown, ToppingId};

/// A named, price-snapshotted configuration.
///
/// Prices are frozen when the favorite is saved and are never recomputed,
/// even if the catalog changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    /// Selected bun.
    #[serde(rename = "bun")]
    pub base: BaseId,
    /// Toppings in catalog order, no duplicates.
    pub toppings: Vec<ToppingId>,
    /// Subtotal, tax and total at save time.
    #[serde(flatten)]
    pub price: Breakdown,
    /// Optional display name chosen by the user.
    #[serde(default)]
    pub name: Option<String>,
}
