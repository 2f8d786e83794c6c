//! Burger builder library.
//!
//! Holds everything a front-end needs to run the builder: the catalog,
//! the in-progress configuration, pricing, persistence and the checkout
//! workflow. Front-ends own a [`BuilderSession`], feed it [`UiEvent`]s and
//! draw from the [`RenderHooks`] it fires.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod configuration;
pub mod display;
pub mod error;
pub mod events;
pub mod hooks;
pub mod models;
pub mod pricing;
pub mod state;
pub mod storage;
pub mod workflow;

pub use catalog::{BaseOption, Catalog, CatalogError, Topping};
pub use config::BuilderConfig;
pub use configuration::Configuration;
pub use error::{AppError, Result};
pub use events::UiEvent;
pub use hooks::{NoopHooks, RenderHooks};
pub use models::{Favorite, OrderRecord, SessionUser};
pub use pricing::price;
pub use state::{BuilderSession, Clock, EphemeralSession, FixedClock, LocalSession, SystemClock};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, PersistenceStore};
pub use workflow::{CheckoutSummary, OrderWorkflow, WorkflowError};
