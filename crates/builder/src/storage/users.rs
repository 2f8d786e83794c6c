//! Session user repository.

use brgrr_core::Username;

use super::{KeyValueStorage, StoreError, read_record, read_record_or_default, write_record};
use crate::models::{SessionUser, storage_keys};

/// Repository for the single logged-in user slot.
pub struct UserRepository<'a, S> {
    storage: &'a mut S,
}

impl<'a, S: KeyValueStorage> UserRepository<'a, S> {
    /// Create a new user repository.
    pub const fn new(storage: &'a mut S) -> Self {
        Self { storage }
    }

    /// Load the session user, reporting corrupt data instead of hiding it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend fails or the stored text is not a
    /// valid user record.
    pub fn try_load(&self) -> Result<Option<SessionUser>, StoreError> {
        read_record(&*self.storage, storage_keys::USER)
    }

    /// Load the session user, or `None` if nobody valid is logged in.
    #[must_use]
    pub fn load(&self) -> Option<SessionUser> {
        read_record_or_default(&*self.storage, storage_keys::USER)
    }

    /// Store the user, or remove the slot when `None`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the record cannot be written.
    pub fn save(&mut self, user: Option<&SessionUser>) -> Result<(), StoreError> {
        match user {
            Some(user) => write_record(&mut *self.storage, storage_keys::USER, user),
            None => {
                self.storage.remove(storage_keys::USER)?;
                Ok(())
            }
        }
    }

    /// Username of the logged-in user, if any.
    #[must_use]
    pub fn username(&self) -> Option<Username> {
        self.load().map(|u| u.username)
    }
}
