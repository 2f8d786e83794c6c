//! Checkout state machine and the actions that write to storage.
//!
//! ```text
//! Editing --open_checkout--> Reviewing --confirm--> Confirmed --acknowledge--> Editing
//!                              |
//!                              +--cancel_checkout--> Editing
//! ```
//!
//! Saving a favorite, logging in and logging out sit outside the state
//! machine and are allowed in every stage.

use brgrr_core::{
    BaseId, Breakdown, CheckoutStage, GUEST_USERNAME, ToppingId, Username, UsernameError,
};
use thiserror::Error;
use tracing::instrument;

use crate::catalog::Catalog;
use crate::configuration::Configuration;
use crate::models::{Favorite, OrderRecord, SessionUser};
use crate::pricing::price;
use crate::storage::{KeyValueStorage, PersistenceStore, StoreError};

/// Action refused because no base is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefusedAction {
    Checkout,
    SaveFavorite,
}

/// Errors raised by workflow actions.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Checkout or save attempted before choosing a base.
    #[error("no base selected")]
    NoBaseSelected(RefusedAction),

    /// Checkout attempted for an order that costs nothing.
    #[error("order total is zero")]
    EmptyOrder,

    /// The action does not apply in the current stage.
    #[error("cannot {action} while {stage}")]
    InvalidTransition {
        action: &'static str,
        stage: CheckoutStage,
    },

    /// The base is not on the menu.
    #[error("unknown base: {0}")]
    UnknownBase(BaseId),

    /// The topping is not on the menu.
    #[error("unknown topping: {0}")]
    UnknownTopping(ToppingId),

    /// The configuration cannot change outside the editing stage.
    #[error("configuration is locked while {0}")]
    ConfigurationLocked(CheckoutStage),

    /// No favorite at the requested position.
    #[error("no favorite at position {0}")]
    FavoriteNotFound(usize),

    /// The login name was rejected.
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    /// Storage failed while committing the action.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl WorkflowError {
    /// Message suitable for showing next to the control that failed.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NoBaseSelected(RefusedAction::Checkout) => {
                "Please choose a bun to continue.".to_string()
            }
            Self::NoBaseSelected(RefusedAction::SaveFavorite) => {
                "Please choose a bun before saving a favorite.".to_string()
            }
            Self::EmptyOrder => "Add something to your burger before checking out.".to_string(),
            Self::UnknownBase(id) => format!("We don't have a '{id}' bun."),
            Self::UnknownTopping(id) => format!("We don't have '{id}' as a topping."),
            Self::ConfigurationLocked(_) => {
                "Finish or cancel checkout before changing your burger.".to_string()
            }
            Self::FavoriteNotFound(_) => "That favorite no longer exists.".to_string(),
            Self::InvalidUsername(err) => format!("Invalid username: {err}."),
            Self::Store(_) => "Your changes could not be saved.".to_string(),
            Self::InvalidTransition { .. } => self.to_string(),
        }
    }
}

/// What the checkout overlay shows before confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub base_label: String,
    /// Topping labels in catalog order.
    pub toppings: Vec<String>,
    pub price: Breakdown,
}

impl CheckoutSummary {
    /// Topping labels joined for display, or `No toppings`.
    #[must_use]
    pub fn toppings_text(&self) -> String {
        if self.toppings.is_empty() {
            crate::display::NO_TOPPINGS.to_string()
        } else {
            self.toppings.join(", ")
        }
    }
}

/// Checkout stage plus the last refusal message shown to the user.
#[derive(Debug, Clone, Default)]
pub struct OrderWorkflow {
    stage: CheckoutStage,
    message: Option<String>,
}

impl OrderWorkflow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// The last refusal message, until the next base selection or applied favorite.
    #[must_use]
    pub fn validation_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn clear_validation(&mut self) {
        self.message = None;
    }

    /// Record `err` for display and hand it back to the caller.
    pub(crate) fn refuse(&mut self, err: WorkflowError) -> WorkflowError {
        self.message = Some(err.user_message());
        err
    }

    fn expect_stage(
        &self,
        expected: CheckoutStage,
        action: &'static str,
    ) -> Result<(), WorkflowError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(WorkflowError::InvalidTransition {
                action,
                stage: self.stage,
            })
        }
    }

    /// Refuse configuration edits outside the editing stage.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::ConfigurationLocked` while reviewing or confirmed.
    pub fn ensure_editing(&self) -> Result<(), WorkflowError> {
        match self.stage {
            CheckoutStage::Editing => Ok(()),
            stage => Err(WorkflowError::ConfigurationLocked(stage)),
        }
    }

    /// Editing -> Reviewing.
    ///
    /// # Errors
    ///
    /// Returns `NoBaseSelected` if the configuration is incomplete, `EmptyOrder`
    /// if it prices to zero, or `InvalidTransition` outside the editing stage.
    /// The stage is unchanged on error.
    pub fn open_checkout(
        &mut self,
        configuration: &Configuration,
        catalog: &Catalog,
    ) -> Result<CheckoutSummary, WorkflowError> {
        self.expect_stage(CheckoutStage::Editing, "open checkout")?;

        let Some(base) = configuration.base() else {
            return Err(self.refuse(WorkflowError::NoBaseSelected(RefusedAction::Checkout)));
        };

        let breakdown = price(configuration, catalog);
        if breakdown.total.is_zero() {
            return Err(self.refuse(WorkflowError::EmptyOrder));
        }

        let toppings = catalog
            .ordered_toppings(configuration.toppings())
            .iter()
            .map(|id| catalog.topping_label(id).to_string())
            .collect();

        self.stage = CheckoutStage::Reviewing;
        tracing::debug!(bun = %base, total = %breakdown.total, "Checkout opened");

        Ok(CheckoutSummary {
            base_label: catalog.base_label(base).to_string(),
            toppings,
            price: breakdown,
        })
    }

    /// Reviewing -> Editing, without side effects.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` outside the reviewing stage.
    pub fn cancel_checkout(&mut self) -> Result<(), WorkflowError> {
        self.expect_stage(CheckoutStage::Reviewing, "cancel checkout")?;
        self.stage = CheckoutStage::Editing;
        tracing::debug!("Checkout cancelled");
        Ok(())
    }

    /// Reviewing -> Confirmed: record the order in history.
    ///
    /// The order is attributed to the session user, or `Guest` when nobody is
    /// logged in.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` outside the reviewing stage, or `Store` if
    /// history cannot be written (the stage stays `Reviewing`).
    #[instrument(skip_all, fields(timestamp = timestamp))]
    pub fn confirm<L: KeyValueStorage, S: KeyValueStorage>(
        &mut self,
        configuration: &Configuration,
        catalog: &Catalog,
        store: &mut PersistenceStore<L, S>,
        timestamp: i64,
    ) -> Result<(OrderRecord, Vec<OrderRecord>), WorkflowError> {
        self.expect_stage(CheckoutStage::Reviewing, "confirm an order")?;

        let Some(base) = configuration.base() else {
            return Err(self.refuse(WorkflowError::NoBaseSelected(RefusedAction::Checkout)));
        };

        let username = store
            .user()
            .username()
            .map_or_else(|| GUEST_USERNAME.to_string(), Username::into_inner);

        let order = OrderRecord {
            base: base.clone(),
            toppings: catalog.ordered_toppings(configuration.toppings()),
            price: price(configuration, catalog),
            username,
            timestamp,
        };

        let history = store.history().append(order.clone())?;
        self.stage = CheckoutStage::Confirmed;

        tracing::info!(
            username = %order.username,
            total = %order.price.total,
            orders = history.len(),
            "Order confirmed"
        );
        Ok((order, history))
    }

    /// Confirmed -> Editing, once the confirmation has been shown.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTransition` outside the confirmed stage.
    pub fn acknowledge(&mut self) -> Result<(), WorkflowError> {
        self.expect_stage(CheckoutStage::Confirmed, "return to editing")?;
        self.stage = CheckoutStage::Editing;
        Ok(())
    }

    /// Snapshot the configuration and its price into the favorites list.
    ///
    /// A blank name is stored as no name.
    ///
    /// # Errors
    ///
    /// Returns `NoBaseSelected` if the configuration is incomplete, or `Store`
    /// if the favorites list cannot be written.
    #[instrument(skip_all)]
    pub fn save_favorite<L: KeyValueStorage, S: KeyValueStorage>(
        &mut self,
        configuration: &Configuration,
        catalog: &Catalog,
        store: &mut PersistenceStore<L, S>,
        name: Option<&str>,
    ) -> Result<Vec<Favorite>, WorkflowError> {
        let Some(base) = configuration.base() else {
            return Err(self.refuse(WorkflowError::NoBaseSelected(RefusedAction::SaveFavorite)));
        };

        let favorite = Favorite {
            base: base.clone(),
            toppings: catalog.ordered_toppings(configuration.toppings()),
            price: price(configuration, catalog),
            name: name
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(ToString::to_string),
        };

        let favorites = store.favorites().append(favorite)?;
        tracing::info!(count = favorites.len(), "Favorite saved");
        Ok(favorites)
    }

    /// Log in as `raw` (trimmed). Blank input is ignored and returns `None`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUsername` for names that are too long, or `Store` if
    /// the user cannot be written.
    #[instrument(skip_all)]
    pub fn login<L: KeyValueStorage, S: KeyValueStorage>(
        &mut self,
        store: &mut PersistenceStore<L, S>,
        raw: &str,
    ) -> Result<Option<Username>, WorkflowError> {
        let username = match Username::parse(raw) {
            Ok(username) => username,
            Err(UsernameError::Empty) => return Ok(None),
            Err(err) => return Err(self.refuse(err.into())),
        };

        store.user().save(Some(&SessionUser {
            username: username.clone(),
        }))?;
        tracing::info!(username = %username, "Logged in");
        Ok(Some(username))
    }

    /// Clear the session user and empty the order history.
    ///
    /// # Errors
    ///
    /// Returns `Store` if either record cannot be written.
    #[instrument(skip_all)]
    pub fn logout<L: KeyValueStorage, S: KeyValueStorage>(
        &mut self,
        store: &mut PersistenceStore<L, S>,
    ) -> Result<(), WorkflowError> {
        store.history().clear()?;
        store.user().save(None)?;
        tracing::info!("Logged out, session history cleared");
        Ok(())
    }
}
