//! Pricing engine.
//!
//! `subtotal = base price + sum of topping prices`, then the tax rule from
//! [`Breakdown::from_subtotal`]. Unknown ids contribute nothing: stored
//! favorites may reference items that have since left the menu.

use brgrr_core::{Amount, Breakdown};

use crate::catalog::Catalog;
use crate::configuration::Configuration;

/// Compute the price breakdown for a configuration.
#[must_use]
pub fn price(configuration: &Configuration, catalog: &Catalog) -> Breakdown {
    let base = configuration
        .base()
        .and_then(|id| catalog.base(id))
        .map_or(Amount::ZERO, |b| b.price);

    let toppings: Amount = configuration
        .toppings()
        .iter()
        .filter_map(|id| catalog.topping(id))
        .map(|t| t.price)
        .sum();

    Breakdown::from_subtotal(base + toppings)
}
