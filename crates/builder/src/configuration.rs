//! The user's current selection: one optional base and a set of toppings.

use std::collections::HashSet;

use brgrr_core::{BaseId, ToppingId};

use crate::models::Favorite;

/// In-progress burger configuration.
///
/// Toppings have set semantics and toggle in and out. Ordering only happens at
/// the storage boundary, via
/// [`Catalog::ordered_toppings`](crate::catalog::Catalog::ordered_toppings).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    base: Option<BaseId>,
    toppings: HashSet<ToppingId>,
}

impl Configuration {
    /// An empty configuration: no base, no toppings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn base(&self) -> Option<&BaseId> {
        self.base.as_ref()
    }

    #[must_use]
    pub const fn toppings(&self) -> &HashSet<ToppingId> {
        &self.toppings
    }

    #[must_use]
    pub fn contains_topping(&self, id: &ToppingId) -> bool {
        self.toppings.contains(id)
    }

    /// Replace the base selection unconditionally.
    pub fn set_base(&mut self, id: BaseId) {
        self.base = Some(id);
    }

    /// Flip membership of a topping. Returns true if it is now selected.
    pub fn toggle_topping(&mut self, id: ToppingId) -> bool {
        if self.toppings.remove(&id) {
            false
        } else {
            self.toppings.insert(id);
            true
        }
    }

    /// Replace base and toppings wholesale with a saved favorite.
    pub fn apply_favorite(&mut self, favorite: &Favorite) {
        self.base = Some(favorite.base.clone());
        self.toppings = favorite.toppings.iter().cloned().collect();
    }

    /// A configuration is complete once a base is chosen. Toppings are optional.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.base.is_some()
    }
}

#[cfg(test)]
mod tests {
    use brgrr_core::{Amount, Breakdown};

    use super::*;

    #[test]
    fn test_new_is_incomplete() {
        let config = Configuration::new();
        assert!(!config.is_complete());
        assert!(config.base().is_none());
        assert!(config.toppings().is_empty());
    }

    #[test]
    fn test_set_base_replaces_previous() {
        let mut config = Configuration::new();
        config.set_base(BaseId::new("classic"));
        config.set_base(BaseId::new("sesame"));
        assert_eq!(config.base(), Some(&BaseId::new("sesame")));
        assert!(config.is_complete());
    }

    #[test]
    fn test_toggle_twice_is_noop() {
        let mut config = Configuration::new();
        let before = config.clone();

        assert!(config.toggle_topping(ToppingId::new("cheese")));
        assert!(config.contains_topping(&ToppingId::new("cheese")));
        assert!(!config.toggle_topping(ToppingId::new("cheese")));

        assert_eq!(config, before);
    }

    #[test]
    fn test_apply_favorite_discards_prior_selection() {
        let mut config = Configuration::new();
        config.set_base(BaseId::new("classic"));
        config.toggle_topping(ToppingId::new("bacon"));

        let favorite = Favorite {
            base: BaseId::new("glutenFree"),
            toppings: vec![ToppingId::new("lettuce"), ToppingId::new("tomato")],
            price: Breakdown::from_subtotal(Amount::new(60)),
            name: None,
        };
        config.apply_favorite(&favorite);

        assert_eq!(config.base(), Some(&BaseId::new("glutenFree")));
        assert!(!config.contains_topping(&ToppingId::new("bacon")));
        assert!(config.contains_topping(&ToppingId::new("lettuce")));
        assert!(config.contains_topping(&ToppingId::new("tomato")));
    }
}
