//! Favorites repository.

use tracing::instrument;

use super::{KeyValueStorage, StoreError, read_record, read_record_or_default, write_record};
use crate::models::{Favorite, storage_keys};

/// Repository for the saved favorites list.
pub struct FavoriteRepository<'a, S> {
    storage: &'a mut S,
}

impl<'a, S: KeyValueStorage> FavoriteRepository<'a, S> {
    /// Create a new favorites repository.
    pub const fn new(storage: &'a mut S) -> Self {
        Self { storage }
    }

    /// Load favorites, reporting corrupt data instead of hiding it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails or the stored text is not a
    /// valid favorites list.
    pub fn try_load(&self) -> Result<Vec<Favorite>, StoreError> {
        Ok(read_record(&*self.storage, storage_keys::FAVORITES)?.unwrap_or_default())
    }

    /// Load favorites in insertion order, or `[]` if nothing valid is stored.
    #[must_use]
    pub fn load(&self) -> Vec<Favorite> {
        read_record_or_default(&*self.storage, storage_keys::FAVORITES)
    }

    /// Replace the whole favorites list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the list cannot be encoded or written.
    pub fn save(&mut self, favorites: &[Favorite]) -> Result<(), StoreError> {
        write_record(&mut *self.storage, storage_keys::FAVORITES, favorites)
    }

    /// Append one favorite and return the updated list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the list cannot be written.
    #[instrument(skip(self, favorite), fields(bun = %favorite.base))]
    pub fn append(&mut self, favorite: Favorite) -> Result<Vec<Favorite>, StoreError> {
        let mut favorites = self.load();
        favorites.push(favorite);
        self.save(&favorites)?;
        Ok(favorites)
    }

    /// Remove every saved favorite.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.storage.remove(storage_keys::FAVORITES)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use brgrr_core::{Amount, BaseId, Breakdown, ToppingId};

    use super::*;
    use crate::storage::MemoryStorage;

    fn favorite(base: &str, subtotal: u64) -> Favorite {
        Favorite {
            base: BaseId::new(base),
            toppings: vec![ToppingId::new("cheese")],
            price: Breakdown::from_subtotal(Amount::new(subtotal)),
            name: None,
        }
    }

    #[test]
    fn test_empty_storage_loads_empty_list() {
        let mut storage = MemoryStorage::new();
        assert!(FavoriteRepository::new(&mut storage).load().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut storage = MemoryStorage::new();
        let mut repo = FavoriteRepository::new(&mut storage);
        repo.append(favorite("classic", 50)).unwrap();
        let all = repo.append(favorite("sesame", 55)).unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(repo.load(), all);
        assert_eq!(all[0].base, BaseId::new("classic"));
        assert_eq!(all[1].base, BaseId::new("sesame"));
    }

    #[test]
    fn test_corrupt_favorites_load_as_empty() {
        let mut storage = MemoryStorage::new();
        storage.set(storage_keys::FAVORITES, "{{{ definitely not json").unwrap();

        let repo = FavoriteRepository::new(&mut storage);
        assert!(repo.try_load().is_err());
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_as_empty() {
        let mut storage = MemoryStorage::new();
        storage
            .set(storage_keys::FAVORITES, r#"{"bun":"classic"}"#)
            .unwrap();
        assert!(FavoriteRepository::new(&mut storage).load().is_empty());
    }

    #[test]
    fn test_append_after_corruption_starts_fresh() {
        let mut storage = MemoryStorage::new();
        storage.set(storage_keys::FAVORITES, "oops").unwrap();

        let mut repo = FavoriteRepository::new(&mut storage);
        let all = repo.append(favorite("classic", 30)).unwrap();
        assert_eq!(all.len(), 1);
        assert!(repo.try_load().is_ok());
    }

    #[test]
    fn test_clear() {
        let mut storage = MemoryStorage::new();
        let mut repo = FavoriteRepository::new(&mut storage);
        repo.append(favorite("classic", 30)).unwrap();
        repo.clear().unwrap();
        assert!(repo.load().is_empty());
        assert!(storage.get(storage_keys::FAVORITES).unwrap().is_none());
    }
}
