//! Input events from the front-end and their dispatch.

use brgrr_core::{BaseId, ToppingId};

use crate::hooks::RenderHooks;
use crate::state::{BuilderSession, Clock};
use crate::storage::KeyValueStorage;
use crate::workflow::WorkflowError;

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SelectBase(BaseId),
    ToggleTopping(ToppingId),
    /// Zero-based position in the favorites list.
    ApplyFavorite(usize),
    SaveFavorite {
        name: Option<String>,
    },
    OpenCheckout,
    CancelCheckout,
    ConfirmCheckout,
    /// The confirmation message has been shown long enough.
    Acknowledge,
    Login(String),
    Logout,
}

impl<L: KeyValueStorage, S: KeyValueStorage, C: Clock> BuilderSession<L, S, C> {
    /// Apply `event` and fire the matching render hooks.
    ///
    /// Refusals are reported through [`RenderHooks::validation_error`] and
    /// also returned, so the caller can decide whether to log them.
    ///
    /// # Errors
    ///
    /// Returns the `WorkflowError` that refused or failed the event. Refused
    /// events leave state unchanged. A `Store` error may leave a logout
    /// partly applied: history is emptied before the user is removed.
    pub fn dispatch(
        &mut self,
        event: UiEvent,
        hooks: &mut impl RenderHooks,
    ) -> Result<(), WorkflowError> {
        tracing::trace!(?event, "Dispatching event");
        let result = self.handle(event, hooks);
        if let Err(err) = &result {
            tracing::debug!(error = %err, "Event refused");
            hooks.validation_error(&err.user_message());
        }
        result
    }

    /// Fire the hooks needed to draw a freshly opened session.
    ///
    /// Restores the logged-in user from session storage and loads the saved
    /// favorites and history.
    pub fn render_initial(&mut self, hooks: &mut impl RenderHooks) {
        match self.current_user() {
            Some(username) => hooks.logged_in(&username),
            None => hooks.logged_out(),
        }
        hooks.favorites_changed(&self.favorites());
        hooks.history_changed(&self.history());
        hooks.price_updated(&self.breakdown(), self.configuration());
    }

    fn handle(
        &mut self,
        event: UiEvent,
        hooks: &mut impl RenderHooks,
    ) -> Result<(), WorkflowError> {
        match event {
            UiEvent::SelectBase(id) => {
                self.set_base(id.clone())?;
                hooks.base_changed(&id);
                hooks.price_updated(&self.breakdown(), self.configuration());
            }
            UiEvent::ToggleTopping(id) => {
                let selected = self.toggle_topping(id.clone())?;
                hooks.topping_toggled(&id, selected);
                hooks.price_updated(&self.breakdown(), self.configuration());
            }
            UiEvent::ApplyFavorite(index) => {
                let favorite = self.apply_favorite(index)?;
                hooks.favorite_applied(&favorite);
                hooks.price_updated(&self.breakdown(), self.configuration());
            }
            UiEvent::SaveFavorite { name } => {
                let favorites = self.save_favorite(name.as_deref())?;
                hooks.favorites_changed(&favorites);
            }
            UiEvent::OpenCheckout => {
                let summary = self.open_checkout()?;
                hooks.checkout_opened(&summary);
            }
            UiEvent::CancelCheckout => {
                self.cancel_checkout()?;
                hooks.checkout_closed();
            }
            UiEvent::ConfirmCheckout => {
                let (order, history) = self.confirm()?;
                hooks.order_confirmed(&order);
                hooks.history_changed(&history);
            }
            UiEvent::Acknowledge => {
                self.acknowledge()?;
                hooks.checkout_closed();
            }
            UiEvent::Login(raw) => {
                if let Some(username) = self.login(&raw)? {
                    hooks.logged_in(&username);
                }
            }
            UiEvent::Logout => {
                self.logout()?;
                hooks.logged_out();
                hooks.history_changed(&[]);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use brgrr_core::{Amount, Breakdown, CheckoutStage, Username};

    use super::*;
    use crate::catalog::Catalog;
    use crate::configuration::Configuration;
    use crate::hooks::NoopHooks;
    use crate::models::{Favorite, OrderRecord};
    use crate::state::{EphemeralSession, FixedClock};
    use crate::storage::PersistenceStore;
    use crate::workflow::CheckoutSummary;

    /// Records every hook call as a short string.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl RenderHooks for Recorder {
        fn base_changed(&mut self, base: &BaseId) {
            self.calls.push(format!("base:{base}"));
        }
        fn topping_toggled(&mut self, topping: &ToppingId, selected: bool) {
            self.calls.push(format!("topping:{topping}:{selected}"));
        }
        fn favorite_applied(&mut self, favorite: &Favorite) {
            self.calls.push(format!("applied:{}", favorite.base));
        }
        fn price_updated(&mut self, breakdown: &Breakdown, _configuration: &Configuration) {
            self.calls.push(format!("price:{}", breakdown.total.get()));
        }
        fn favorites_changed(&mut self, favorites: &[Favorite]) {
            self.calls.push(format!("favorites:{}", favorites.len()));
        }
        fn checkout_opened(&mut self, summary: &CheckoutSummary) {
            self.calls.push(format!("checkout:{}", summary.base_label));
        }
        fn checkout_closed(&mut self) {
            self.calls.push("closed".to_string());
        }
        fn order_confirmed(&mut self, order: &OrderRecord) {
            self.calls.push(format!("order:{}", order.username));
        }
        fn history_changed(&mut self, history: &[OrderRecord]) {
            self.calls.push(format!("history:{}", history.len()));
        }
        fn logged_in(&mut self, username: &Username) {
            self.calls.push(format!("login:{username}"));
        }
        fn logged_out(&mut self) {
            self.calls.push("logout".to_string());
        }
        fn validation_error(&mut self, message: &str) {
            self.calls.push(format!("error:{message}"));
        }
    }

    fn session() -> EphemeralSession<FixedClock> {
        BuilderSession::with_clock(
            Catalog::standard(),
            PersistenceStore::in_memory(),
            FixedClock(0),
        )
    }

    #[test]
    fn test_full_order_fires_hooks_in_order() {
        let mut s = session();
        let mut hooks = Recorder::default();

        for event in [
            UiEvent::Login("ada".to_string()),
            UiEvent::SelectBase(BaseId::new("classic")),
            UiEvent::ToggleTopping(ToppingId::new("cheese")),
            UiEvent::ToggleTopping(ToppingId::new("bacon")),
            UiEvent::OpenCheckout,
            UiEvent::ConfirmCheckout,
            UiEvent::Acknowledge,
        ] {
            s.dispatch(event, &mut hooks).unwrap();
        }

        assert_eq!(
            hooks.calls,
            [
                "login:ada",
                "base:classic",
                "price:32",
                "topping:cheese:true",
                "price:53",
                "topping:bacon:true",
                "price:84",
                "checkout:Classic",
                "order:ada",
                "history:1",
                "closed",
            ]
        );
    }

    #[test]
    fn test_refusal_reports_validation_error() {
        let mut s = session();
        let mut hooks = Recorder::default();

        let err = s.dispatch(UiEvent::OpenCheckout, &mut hooks).unwrap_err();
        assert!(matches!(err, WorkflowError::NoBaseSelected(_)));
        assert_eq!(hooks.calls, ["error:Please choose a bun to continue."]);
        assert_eq!(s.stage(), CheckoutStage::Editing);
    }

    #[test]
    fn test_unknown_menu_ids_are_refused() {
        let mut s = session();
        let mut hooks = Recorder::default();

        assert!(matches!(
            s.dispatch(UiEvent::SelectBase(BaseId::new("brioche")), &mut hooks),
            Err(WorkflowError::UnknownBase(_))
        ));
        assert!(matches!(
            s.dispatch(UiEvent::ToggleTopping(ToppingId::new("pineapple")), &mut hooks),
            Err(WorkflowError::UnknownTopping(_))
        ));

        assert_eq!(
            hooks.calls,
            [
                "error:We don't have a 'brioche' bun.",
                "error:We don't have 'pineapple' as a topping.",
            ]
        );
        assert_eq!(s.configuration(), &Configuration::new());
    }

    #[test]
    fn test_blank_login_fires_nothing() {
        let mut s = session();
        let mut hooks = Recorder::default();
        s.dispatch(UiEvent::Login("  ".to_string()), &mut hooks).unwrap();
        assert!(hooks.calls.is_empty());
    }

    #[test]
    fn test_logout_clears_history_view() {
        let mut s = session();
        s.dispatch(UiEvent::SelectBase(BaseId::new("sesame")), &mut NoopHooks)
            .unwrap();
        s.dispatch(UiEvent::OpenCheckout, &mut NoopHooks).unwrap();
        s.dispatch(UiEvent::ConfirmCheckout, &mut NoopHooks).unwrap();

        let mut hooks = Recorder::default();
        s.dispatch(UiEvent::Logout, &mut hooks).unwrap();
        assert_eq!(hooks.calls, ["logout", "history:0"]);
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_save_and_apply_favorite() {
        let mut s = session();
        let mut hooks = Recorder::default();
        s.dispatch(UiEvent::SelectBase(BaseId::new("sesame")), &mut NoopHooks)
            .unwrap();
        s.dispatch(UiEvent::SaveFavorite { name: None }, &mut hooks)
            .unwrap();
        s.dispatch(UiEvent::ApplyFavorite(0), &mut hooks).unwrap();

        assert_eq!(hooks.calls, ["favorites:1", "applied:sesame", "price:37"]);
        assert_eq!(s.breakdown().total, Amount::new(37));
    }

    #[test]
    fn test_render_initial_restores_user() {
        let mut s = session();
        s.login("ada").unwrap();

        let mut hooks = Recorder::default();
        s.render_initial(&mut hooks);
        assert_eq!(
            hooks.calls,
            ["login:ada", "favorites:0", "history:0", "price:0"]
        );
    }
}
