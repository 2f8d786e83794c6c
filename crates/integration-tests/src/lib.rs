//! Integration tests for BRGRR.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p brgrr-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `order_flow` - Building, pricing and checking out through `BuilderSession`
//! - `persistence` - Stored records, corruption fallback and on-disk favorites
//!
//! This library holds the fixtures both suites share.

use brgrr_builder::{
    BuilderSession, Catalog, CheckoutSummary, Configuration, EphemeralSession, Favorite,
    FixedClock, OrderRecord, PersistenceStore, RenderHooks,
};
use brgrr_core::{BaseId, Breakdown, ToppingId, Username};

/// 2023-11-14T22:13:20Z
pub const FIXED_NOW: i64 = 1_700_000_000_000;

/// A fresh in-memory session with the standard catalog and a pinned clock.
#[must_use]
pub fn session() -> EphemeralSession<FixedClock> {
    BuilderSession::with_clock(
        Catalog::standard(),
        PersistenceStore::in_memory(),
        FixedClock(FIXED_NOW),
    )
}

/// One recorded hook call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Render {
    Base(BaseId),
    Topping(ToppingId, bool),
    FavoriteApplied(Favorite),
    Price(Breakdown),
    Favorites(usize),
    CheckoutOpened(CheckoutSummary),
    CheckoutClosed,
    OrderConfirmed(OrderRecord),
    History(usize),
    LoggedIn(String),
    LoggedOut,
    Validation(String),
}

/// Hooks that record every call in order.
#[derive(Debug, Default)]
pub struct RecordingHooks {
    pub renders: Vec<Render>,
}

impl RecordingHooks {
    /// Validation messages seen so far.
    #[must_use]
    pub fn validation_messages(&self) -> Vec<&str> {
        self.renders
            .iter()
            .filter_map(|r| match r {
                Render::Validation(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The most recent price render.
    #[must_use]
    pub fn last_price(&self) -> Option<Breakdown> {
        self.renders.iter().rev().find_map(|r| match r {
            Render::Price(breakdown) => Some(*breakdown),
            _ => None,
        })
    }
}

impl RenderHooks for RecordingHooks {
    fn base_changed(&mut self, base: &BaseId) {
        self.renders.push(Render::Base(base.clone()));
    }

    fn topping_toggled(&mut self, topping: &ToppingId, selected: bool) {
        self.renders.push(Render::Topping(topping.clone(), selected));
    }

    fn favorite_applied(&mut self, favorite: &Favorite) {
        self.renders.push(Render::FavoriteApplied(favorite.clone()));
    }

    fn price_updated(&mut self, breakdown: &Breakdown, _configuration: &Configuration) {
        self.renders.push(Render::Price(*breakdown));
    }

    fn favorites_changed(&mut self, favorites: &[Favorite]) {
        self.renders.push(Render::Favorites(favorites.len()));
    }

    fn checkout_opened(&mut self, summary: &CheckoutSummary) {
        self.renders.push(Render::CheckoutOpened(summary.clone()));
    }

    fn checkout_closed(&mut self) {
        self.renders.push(Render::CheckoutClosed);
    }

    fn order_confirmed(&mut self, order: &OrderRecord) {
        self.renders.push(Render::OrderConfirmed(order.clone()));
    }

    fn history_changed(&mut self, history: &[OrderRecord]) {
        self.renders.push(Render::History(history.len()));
    }

    fn logged_in(&mut self, username: &Username) {
        self.renders.push(Render::LoggedIn(username.to_string()));
    }

    fn logged_out(&mut self) {
        self.renders.push(Render::LoggedOut);
    }

    fn validation_error(&mut self, message: &str) {
        self.renders.push(Render::Validation(message.to_string()));
    }
}
