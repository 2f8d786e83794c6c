//! Status enums for the order workflow.

use serde::{Deserialize, Serialize};

/// Stage of the checkout workflow.
///
/// `Editing -> Reviewing -> Confirmed -> Editing`, with `Reviewing -> Editing`
/// on cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStage {
    /// The user is adjusting the configuration.
    #[default]
    Editing,
    /// The checkout summary is displayed; nothing is committed yet.
    Reviewing,
    /// The order was appended to history.
    Confirmed,
}

impl std::fmt::Display for CheckoutStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Editing => write!(f, "editing"),
            Self::Reviewing => write!(f, "reviewing"),
            Self::Confirmed => write!(f, "confirmed"),
        }
    }
}
