//! Persistence for favorites, the session user and order history.
//!
//! # Storage slots
//!
//! Each record lives under its own key as JSON text:
//!
//! - `brgrr_favorites` - favorites list, in *local* storage (survives sessions)
//! - `brgrr_user` - logged-in user, in *session* storage
//! - `brgrr_order_history` - confirmed orders, in *session* storage
//!
//! # Degradation
//!
//! Reads never fail the caller. Every repository exposes `try_load`, which
//! reports corrupt or unreadable data as a [`StoreError`], and `load`, which
//! substitutes the documented default (`[]` or no user) and logs a warning.
//!
//! Collections are written as whole snapshots: load, change in memory, save.

pub mod favorites;
pub mod file;
pub mod history;
pub mod memory;
pub mod users;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use favorites::FavoriteRepository;
pub use file::FileStorage;
pub use history::HistoryRepository;
pub use memory::MemoryStorage;
pub use users::UserRepository;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem access failed.
    #[error("storage I/O error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while reading or writing a typed record.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Stored text did not parse as the expected record.
    #[error("corrupt record under {key}: {source}")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A record could not be encoded.
    #[error("failed to encode record for {key}: {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A string key-value store, the shape of browser `localStorage`.
pub trait KeyValueStorage {
    /// Read the text stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Read and decode a record. Missing keys and JSON `null` both yield `None`.
fn read_record<T: DeserializeOwned>(
    storage: &impl KeyValueStorage,
    key: &'static str,
) -> Result<Option<T>, StoreError> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };

    serde_json::from_str::<Option<T>>(&raw).map_err(|source| StoreError::Corrupt { key, source })
}

/// Read a record, substituting `T::default()` on any failure.
fn read_record_or_default<T: DeserializeOwned + Default>(
    storage: &impl KeyValueStorage,
    key: &'static str,
) -> T {
    match read_record(storage, key) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding unreadable record, using default");
            T::default()
        }
    }
}

/// Encode and store a record.
fn write_record<T: Serialize + ?Sized>(
    storage: &mut impl KeyValueStorage,
    key: &'static str,
    value: &T,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(value).map_err(|source| StoreError::Encode { key, source })?;
    storage.set(key, &json)?;
    Ok(())
}

/// The three persisted records over their two backends.
///
/// `L` models browser local storage (favorites), `S` models session storage
/// (user and history).
#[derive(Debug, Default)]
pub struct PersistenceStore<L, S> {
    local: L,
    session: S,
}

impl<L: KeyValueStorage, S: KeyValueStorage> PersistenceStore<L, S> {
    /// Create a store over the given local and session backends.
    #[must_use]
    pub const fn new(local: L, session: S) -> Self {
        Self { local, session }
    }

    /// Favorites repository (local storage).
    pub fn favorites(&mut self) -> FavoriteRepository<'_, L> {
        FavoriteRepository::new(&mut self.local)
    }

    /// Order history repository (session storage).
    pub fn history(&mut self) -> HistoryRepository<'_, S> {
        HistoryRepository::new(&mut self.session)
    }

    /// Session user repository (session storage).
    pub fn user(&mut self) -> UserRepository<'_, S> {
        UserRepository::new(&mut self.session)
    }

    /// Access the local backend directly.
    pub fn local_mut(&mut self) -> &mut L {
        &mut self.local
    }

    /// Access the session backend directly.
    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }
}

impl PersistenceStore<MemoryStorage, MemoryStorage> {
    /// A store with both backends in memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new(), MemoryStorage::new())
    }
}
