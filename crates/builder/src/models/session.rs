//! Session-related types.
//!
//! Types stored in session storage for login state.

use serde::{Deserialize, Serialize};

use brgrr_core::Username;

/// Session-stored user identity.
///
/// A single slot: at most one user is logged in per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: Username,
}

/// Storage keys for the persisted records.
pub mod keys {
    /// Key for the favorites list (local storage, survives sessions).
    pub const FAVORITES: &str = "brgrr_favorites";

    /// Key for the logged-in user (session storage).
    pub const USER: &str = "brgrr_user";

    /// Key for the order history (session storage).
    pub const HISTORY: &str = "brgrr_order_history";
}
