//! Order history repository.

use tracing::instrument;

use super::{KeyValueStorage, StoreError, read_record, read_record_or_default, write_record};
use crate::models::{OrderRecord, storage_keys};

/// Repository for the session's confirmed orders.
pub struct HistoryRepository<'a, S> {
    storage: &'a mut S,
}

impl<'a, S: KeyValueStorage> HistoryRepository<'a, S> {
    /// Create a new history repository.
    pub const fn new(storage: &'a mut S) -> Self {
        Self { storage }
    }

    /// Load history, reporting corrupt data instead of hiding it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails or the stored text is not a
    /// valid order list.
    pub fn try_load(&self) -> Result<Vec<OrderRecord>, StoreError> {
        Ok(read_record(&*self.storage, storage_keys::HISTORY)?.unwrap_or_default())
    }

    /// Load history in confirmation order, or `[]` if nothing valid is stored.
    #[must_use]
    pub fn load(&self) -> Vec<OrderRecord> {
        read_record_or_default(&*self.storage, storage_keys::HISTORY)
    }

    /// Replace the whole history.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the list cannot be encoded or written.
    pub fn save(&mut self, history: &[OrderRecord]) -> Result<(), StoreError> {
        write_record(&mut *self.storage, storage_keys::HISTORY, history)
    }

    /// Append one order and return the updated history.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the history cannot be written.
    #[instrument(skip(self, order), fields(username = %order.username, total = %order.price.total))]
    pub fn append(&mut self, order: OrderRecord) -> Result<Vec<OrderRecord>, StoreError> {
        let mut history = self.load();
        history.push(order);
        self.save(&history)?;
        Ok(history)
    }

    /// Empty the history. The key is kept and holds `[]`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.save(&[])
    }
}
