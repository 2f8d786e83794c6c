//! Text helpers for front-ends rendering catalog items and saved records.
//!
//! Unknown ids render with placeholders instead of failing: a favorite saved
//! against an older menu still shows up, just with `Unknown bun` or the raw
//! topping id.

use std::fmt::Display;

use brgrr_core::{BaseId, GUEST_USERNAME, ToppingId};
use chrono::{DateTime, Local, TimeZone};

use crate::catalog::{Catalog, Topping};
use crate::models::{Favorite, OrderRecord};

/// Shown when a configuration has no toppings.
pub const NO_TOPPINGS: &str = "No toppings";

/// Shown when the favorites list is empty.
pub const EMPTY_FAVORITES: &str = "No favorites yet. Save your first combo!";

/// Shown when the session has no confirmed orders.
pub const EMPTY_HISTORY: &str = "No orders yet this session.";

/// Shown in place of a time that cannot be represented.
const UNKNOWN_TIME: &str = "--:--";

/// Comma-separated topping labels, or [`NO_TOPPINGS`].
#[must_use]
pub fn toppings_text(catalog: &Catalog, toppings: &[ToppingId]) -> String {
    if toppings.is_empty() {
        return NO_TOPPINGS.to_string();
    }

    toppings
        .iter()
        .map(|id| catalog.topping_label(id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line description of a saved configuration, e.g. `Classic • Cheese, Bacon`.
#[must_use]
pub fn describe(catalog: &Catalog, base: &BaseId, toppings: &[ToppingId]) -> String {
    format!(
        "{} • {}",
        catalog.base_label(base),
        toppings_text(catalog, toppings)
    )
}

/// Checkbox label for a topping, e.g. `Cheese (₹20)`.
#[must_use]
pub fn topping_option(topping: &Topping) -> String {
    format!("{} ({})", topping.label, topping.price)
}

/// Title for the favorite at zero-based `index`: its name, or `Favorite #n`.
#[must_use]
pub fn favorite_title(favorite: &Favorite, index: usize) -> String {
    match favorite.name.as_deref() {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => format!("Favorite #{}", index + 1),
    }
}

/// Title for a history entry in local time, e.g. `ada – 14:05`.
#[must_use]
pub fn history_title(order: &OrderRecord) -> String {
    history_title_in(order, &Local)
}

/// Title for a history entry with the time rendered in `tz`.
#[must_use]
pub fn history_title_in<Tz: TimeZone>(order: &OrderRecord, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    let time = DateTime::from_timestamp_millis(order.timestamp).map_or_else(
        || UNKNOWN_TIME.to_string(),
        |t| t.with_timezone(tz).format("%H:%M").to_string(),
    );
    let username = order.username.trim();
    let username = if username.is_empty() { GUEST_USERNAME } else { username };
    format!("{username} – {time}")
}
