//! Command implementations.

pub mod favorites;
pub mod menu;
pub mod render;
pub mod shell;
