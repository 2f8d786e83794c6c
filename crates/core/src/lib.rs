//! BRGRR Core - Shared types library.
//!
//! This crate provides the value types used across all BRGRR components:
//! - `builder` - Catalog, pricing, storage and the order workflow
//! - `cli` - Terminal front-end that drives the builder
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage
//! access, no clocks. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for catalog keys, amounts, usernames, and workflow stages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
