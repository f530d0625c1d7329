//! Error types for the key routing layer
//!
//! Routing itself never fails (an unknown key is simply not consumed); these
//! cover lookups and configuration arriving from the host.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Pad action identifier not in the registry
    #[error("Unknown pad action: {0}")]
    UnknownAction(String),

    /// Named edit command the router does not handle
    #[error("Unknown edit command: {0}")]
    UnknownCommand(String),

    /// Edit target kind string not recognised
    #[error("Unknown edit target kind: {0}")]
    UnknownTarget(String),

    /// Router configuration could not be read
    #[error("Invalid router configuration: {0}")]
    InvalidConfig(String),
}
