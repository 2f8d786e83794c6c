//! Core types for BRGRR.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod status;
pub mod username;

pub use id::*;
pub use price::{Amount, Breakdown, CURRENCY_SYMBOL, TAX_RATE, round_half_away};
pub use status::*;
pub use username::{GUEST_USERNAME, Username, UsernameError};
