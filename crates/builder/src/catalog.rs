//! Static reference data for bases and toppings.
//!
//! The catalog is built once at startup and never mutated. Lookups return
//! `None` for unknown ids; callers decide the fallback (zero price for the
//! pricing engine, a placeholder label for display).

use std::collections::HashSet;

use brgrr_core::{Amount, BaseId, ToppingId};
use thiserror::Error;

/// Label shown for a base id that is not in the catalog.
pub const UNKNOWN_BASE_LABEL: &str = "Unknown bun";

/// Errors raised while building a custom catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate base id: {0}")]
    DuplicateBase(BaseId),
    #[error("duplicate topping id: {0}")]
    DuplicateTopping(ToppingId),
}

/// One selectable catalog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry<K> {
    pub id: K,
    pub label: String,
    pub price: Amount,
}

impl<K> CatalogEntry<K> {
    /// Create an entry from its parts.
    pub fn new(id: impl Into<K>, label: impl Into<String>, price: u64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            price: Amount::new(price),
        }
    }
}

/// A bun option. Exactly zero or one is selected per configuration.
pub type BaseOption = CatalogEntry<BaseId>;

/// An optional add-on.
pub type Topping = CatalogEntry<ToppingId>;

/// Read-only lookup table for bases and toppings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    bases: Vec<BaseOption>,
    toppings: Vec<Topping>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if a base or topping id appears twice.
    pub fn new(bases: Vec<BaseOption>, toppings: Vec<Topping>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for base in &bases {
            if !seen.insert(&base.id) {
                return Err(CatalogError::DuplicateBase(base.id.clone()));
            }
        }

        let mut seen = HashSet::new();
        for topping in &toppings {
            if !seen.insert(&topping.id) {
                return Err(CatalogError::DuplicateTopping(topping.id.clone()));
            }
        }

        Ok(Self { bases, toppings })
    }

    /// The house menu.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bases: vec![
                BaseOption::new("classic", "Classic", 30),
                BaseOption::new("sesame", "Sesame", 35),
                BaseOption::new("glutenFree", "Gluten-Free", 40),
            ],
            toppings: vec![
                Topping::new("cheese", "Cheese", 20),
                Topping::new("bacon", "Bacon", 30),
                Topping::new("lettuce", "Lettuce", 10),
                Topping::new("tomato", "Tomato", 10),
                Topping::new("onions", "Caramelized Onions", 15),
                Topping::new("jalapeno", "Jalapeños", 15),
                Topping::new("mushroom", "Mushrooms", 20),
                Topping::new("sauce", "Special Sauce", 10),
            ],
        }
    }

    /// Bases in declaration order.
    #[must_use]
    pub fn bases(&self) -> &[BaseOption] {
        &self.bases
    }

    /// Toppings in catalog order.
    #[must_use]
    pub fn toppings(&self) -> &[Topping] {
        &self.toppings
    }

    #[must_use]
    pub fn base(&self, id: &BaseId) -> Option<&BaseOption> {
        self.bases.iter().find(|b| &b.id == id)
    }

    #[must_use]
    pub fn topping(&self, id: &ToppingId) -> Option<&Topping> {
        self.toppings.iter().find(|t| &t.id == id)
    }

    /// Catalog label for a base, or [`UNKNOWN_BASE_LABEL`].
    #[must_use]
    pub fn base_label(&self, id: &BaseId) -> &str {
        self.base(id).map_or(UNKNOWN_BASE_LABEL, |b| b.label.as_str())
    }

    /// Catalog label for a topping, or the raw id when it is unknown.
    #[must_use]
    pub fn topping_label<'a>(&'a self, id: &'a ToppingId) -> &'a str {
        self.topping(id).map_or(id.as_str(), |t| t.label.as_str())
    }

    /// Order a topping set for storage and display.
    ///
    /// Known ids come first in catalog order, followed by unknown ids sorted
    /// lexically, so the same set always yields the same sequence.
    #[must_use]
    pub fn ordered_toppings(&self, selected: &HashSet<ToppingId>) -> Vec<ToppingId> {
        let mut ordered: Vec<ToppingId> = self
            .toppings
            .iter()
            .filter(|t| selected.contains(&t.id))
            .map(|t| t.id.clone())
            .collect();

        let mut unknown: Vec<ToppingId> = selected
            .iter()
            .filter(|id| self.topping(id).is_none())
            .cloned()
            .collect();
        unknown.sort();

        ordered.extend(unknown);
        ordered
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lookup() {
        let catalog = Catalog::standard();
        let classic = catalog.base(&BaseId::new("classic")).unwrap();
        assert_eq!(classic.price, Amount::new(30));
        assert_eq!(classic.label, "Classic");

        let bacon = catalog.topping(&ToppingId::new("bacon")).unwrap();
        assert_eq!(bacon.price, Amount::new(30));
    }

    #[test]
    fn test_unknown_ids_return_none() {
        let catalog = Catalog::standard();
        assert!(catalog.base(&BaseId::new("brioche")).is_none());
        assert!(catalog.topping(&ToppingId::new("pineapple")).is_none());
    }

    #[test]
    fn test_labels_fall_back_to_placeholders() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.base_label(&BaseId::new("glutenFree")), "Gluten-Free");
        assert_eq!(catalog.base_label(&BaseId::new("brioche")), "Unknown bun");

        let onions = ToppingId::new("onions");
        assert_eq!(catalog.topping_label(&onions), "Caramelized Onions");
        let pineapple = ToppingId::new("pineapple");
        assert_eq!(catalog.topping_label(&pineapple), "pineapple");
    }

    #[test]
    fn test_ordered_toppings_follow_catalog_order() {
        let catalog = Catalog::standard();
        let selected: HashSet<ToppingId> = ["sauce", "zucchini", "cheese", "avocado", "bacon"]
            .into_iter()
            .map(ToppingId::from)
            .collect();

        let ordered = catalog.ordered_toppings(&selected);
        let ids: Vec<&str> = ordered.iter().map(ToppingId::as_str).collect();
        assert_eq!(ids, ["cheese", "bacon", "sauce", "avocado", "zucchini"]);
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let err = Catalog::new(
            vec![
                BaseOption::new("classic", "Classic", 30),
                BaseOption::new("classic", "Classic Again", 31),
            ],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateBase(BaseId::new("classic")));

        let err = Catalog::new(
            vec![],
            vec![
                Topping::new("cheese", "Cheese", 20),
                Topping::new("cheese", "More Cheese", 25),
            ],
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateTopping(ToppingId::new("cheese")));
    }

    #[test]
    fn test_topping_ids_are_unique_in_standard_menu() {
        let catalog = Catalog::standard();
        let rebuilt = Catalog::new(catalog.bases().to_vec(), catalog.toppings().to_vec());
        assert_eq!(rebuilt.unwrap(), catalog);
    }
}
