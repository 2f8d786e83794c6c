//! Render hooks for the front-end.
//!
//! [`BuilderSession::dispatch`](crate::state::BuilderSession::dispatch) calls
//! these after each input event is applied. Every hook defaults to a no-op,
//! so a front-end only implements what it draws.

use brgrr_core::{BaseId, Breakdown, ToppingId, Username};

use crate::configuration::Configuration;
use crate::models::{Favorite, OrderRecord};
use crate::workflow::CheckoutSummary;

/// Callbacks fired after state changes.
#[allow(unused_variables)]
pub trait RenderHooks {
    /// A base was selected.
    fn base_changed(&mut self, base: &BaseId) {}

    /// A topping was added (`selected`) or removed.
    fn topping_toggled(&mut self, topping: &ToppingId, selected: bool) {}

    /// A saved favorite replaced the configuration.
    fn favorite_applied(&mut self, favorite: &Favorite) {}

    /// The configuration changed and was re-priced.
    fn price_updated(&mut self, breakdown: &Breakdown, configuration: &Configuration) {}

    /// The favorites list changed or was first loaded.
    fn favorites_changed(&mut self, favorites: &[Favorite]) {}

    /// The checkout summary is ready to display.
    fn checkout_opened(&mut self, summary: &CheckoutSummary) {}

    /// The checkout summary should be hidden.
    fn checkout_closed(&mut self) {}

    /// An order was appended to history.
    fn order_confirmed(&mut self, order: &OrderRecord) {}

    /// The order history changed or was first loaded.
    fn history_changed(&mut self, history: &[OrderRecord]) {}

    fn logged_in(&mut self, username: &Username) {}

    fn logged_out(&mut self) {}

    /// An action was refused; `message` is meant for the user.
    fn validation_error(&mut self, message: &str) {}
}

/// Hooks that draw nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl RenderHooks for NoopHooks {}
