//! Session state owned by one builder front-end.
//!
//! [`BuilderSession`] is the only place mutable state lives: the catalog,
//! the in-progress configuration, the checkout stage and the persistence
//! store. Front-ends hold one session and pass it by reference; nothing is
//! global, so the whole flow runs in tests without a UI.

use brgrr_core::{BaseId, Breakdown, CheckoutStage, ToppingId, Username};

use crate::catalog::Catalog;
use crate::configuration::Configuration;
use crate::models::{Favorite, OrderRecord};
use crate::pricing::price;
use crate::storage::{FileStorage, KeyValueStorage, MemoryStorage, PersistenceStore};
use crate::workflow::{CheckoutSummary, OrderWorkflow, WorkflowError};

/// Source of order timestamps.
pub trait Clock {
    /// Current time in epoch milliseconds.
    fn now_millis(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Favorites on disk, user and history in memory for this process.
pub type LocalSession = BuilderSession<FileStorage, MemoryStorage>;

/// Everything in memory.
pub type EphemeralSession<C = SystemClock> = BuilderSession<MemoryStorage, MemoryStorage, C>;

/// One user's editing session.
#[derive(Debug)]
pub struct BuilderSession<L, S, C = SystemClock> {
    catalog: Catalog,
    configuration: Configuration,
    workflow: OrderWorkflow,
    store: PersistenceStore<L, S>,
    clock: C,
}

impl<L: KeyValueStorage, S: KeyValueStorage> BuilderSession<L, S, SystemClock> {
    /// Create a session using the wall clock.
    #[must_use]
    pub fn new(catalog: Catalog, store: PersistenceStore<L, S>) -> Self {
        Self::with_clock(catalog, store, SystemClock)
    }
}

impl<L: KeyValueStorage, S: KeyValueStorage, C: Clock> BuilderSession<L, S, C> {
    /// Create a session with an explicit clock.
    #[must_use]
    pub fn with_clock(catalog: Catalog, store: PersistenceStore<L, S>, clock: C) -> Self {
        Self {
            catalog,
            configuration: Configuration::new(),
            workflow: OrderWorkflow::new(),
            store,
            clock,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    #[must_use]
    pub const fn stage(&self) -> CheckoutStage {
        self.workflow.stage()
    }

    #[must_use]
    pub fn validation_message(&self) -> Option<&str> {
        self.workflow.validation_message()
    }

    /// Price of the current configuration, recomputed on every call.
    #[must_use]
    pub fn breakdown(&self) -> Breakdown {
        price(&self.configuration, &self.catalog)
    }

    /// Direct access to the persisted records.
    pub fn store_mut(&mut self) -> &mut PersistenceStore<L, S> {
        &mut self.store
    }

    /// Saved favorites, oldest first.
    pub fn favorites(&mut self) -> Vec<Favorite> {
        self.store.favorites().load()
    }

    /// Orders confirmed this session, oldest first.
    pub fn history(&mut self) -> Vec<OrderRecord> {
        self.store.history().load()
    }

    /// The logged-in user restored from session storage, if any.
    pub fn current_user(&mut self) -> Option<Username> {
        self.store.user().username()
    }

    /// Select a base.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationLocked` outside the editing stage, or
    /// `UnknownBase` if `id` is not on the menu.
    pub fn set_base(&mut self, id: BaseId) -> Result<(), WorkflowError> {
        self.workflow.ensure_editing()?;
        if self.catalog.base(&id).is_none() {
            return Err(self.workflow.refuse(WorkflowError::UnknownBase(id)));
        }
        tracing::debug!(bun = %id, "Base selected");
        self.configuration.set_base(id);
        self.workflow.clear_validation();
        Ok(())
    }

    /// Toggle a topping. Returns true if it is now selected.
    ///
    /// A topping that is no longer on the menu can still be toggled off, so a
    /// stale id loaded from a favorite can be removed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationLocked` outside the editing stage, or
    /// `UnknownTopping` when adding an id that is not on the menu.
    pub fn toggle_topping(&mut self, id: ToppingId) -> Result<bool, WorkflowError> {
        self.workflow.ensure_editing()?;
        if self.catalog.topping(&id).is_none() && !self.configuration.contains_topping(&id) {
            return Err(self.workflow.refuse(WorkflowError::UnknownTopping(id)));
        }
        let selected = self.configuration.toggle_topping(id);
        Ok(selected)
    }

    /// Replace the configuration with the favorite at zero-based `index`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationLocked` outside the editing stage, or
    /// `FavoriteNotFound` if there is no favorite at `index`.
    pub fn apply_favorite(&mut self, index: usize) -> Result<Favorite, WorkflowError> {
        self.workflow.ensure_editing()?;
        let favorite = self
            .favorites()
            .into_iter()
            .nth(index)
            .ok_or(WorkflowError::FavoriteNotFound(index))?;

        self.configuration.apply_favorite(&favorite);
        self.workflow.clear_validation();
        tracing::debug!(index, bun = %favorite.base, "Favorite applied");
        Ok(favorite)
    }

    /// Save the current configuration as a favorite.
    ///
    /// # Errors
    ///
    /// See [`OrderWorkflow::save_favorite`].
    pub fn save_favorite(&mut self, name: Option<&str>) -> Result<Vec<Favorite>, WorkflowError> {
        self.workflow
            .save_favorite(&self.configuration, &self.catalog, &mut self.store, name)
    }

    /// Open the checkout summary.
    ///
    /// # Errors
    ///
    /// See [`OrderWorkflow::open_checkout`].
    pub fn open_checkout(&mut self) -> Result<CheckoutSummary, WorkflowError> {
        self.workflow
            .open_checkout(&self.configuration, &self.catalog)
    }

    /// Close the checkout summary without ordering.
    ///
    /// # Errors
    ///
    /// See [`OrderWorkflow::cancel_checkout`].
    pub fn cancel_checkout(&mut self) -> Result<(), WorkflowError> {
        self.workflow.cancel_checkout()
    }

    /// Commit the reviewed order to history.
    ///
    /// # Errors
    ///
    /// See [`OrderWorkflow::confirm`].
    pub fn confirm(&mut self) -> Result<(OrderRecord, Vec<OrderRecord>), WorkflowError> {
        let now = self.clock.now_millis();
        self.workflow
            .confirm(&self.configuration, &self.catalog, &mut self.store, now)
    }

    /// Leave the confirmation screen.
    ///
    /// # Errors
    ///
    /// See [`OrderWorkflow::acknowledge`].
    pub fn acknowledge(&mut self) -> Result<(), WorkflowError> {
        self.workflow.acknowledge()
    }

    /// Log in. Blank names are ignored and return `None`.
    ///
    /// # Errors
    ///
    /// See [`OrderWorkflow::login`].
    pub fn login(&mut self, username: &str) -> Result<Option<Username>, WorkflowError> {
        self.workflow.login(&mut self.store, username)
    }

    /// Log out and empty the session history.
    ///
    /// # Errors
    ///
    /// See [`OrderWorkflow::logout`].
    pub fn logout(&mut self) -> Result<(), WorkflowError> {
        self.workflow.logout(&mut self.store)
    }
}

impl LocalSession {
    /// Open a session whose favorites live under `data_dir`.
    #[must_use]
    pub fn open(catalog: Catalog, data_dir: impl Into<std::path::PathBuf>) -> Self {
        Self::new(
            catalog,
            PersistenceStore::new(FileStorage::new(data_dir), MemoryStorage::new()),
        )
    }
}
