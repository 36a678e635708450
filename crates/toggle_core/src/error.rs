//! Error types for toggle_core

use thiserror::Error;

/// Errors raised by the toggle engine
///
/// Only input that arrives as text can fail: a typed [`Action`](crate::Action)
/// always names a supported transition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToggleError {
    /// An action name that is neither `toggle` nor `reset`
    #[error("Unsupported action type: {0}")]
    UnsupportedActionType(String),
}

/// Result type for toggle_core operations
pub type Result<T> = std::result::Result<T, ToggleError>;
