//! Error types for theme selection.

use thiserror::Error;

/// Errors raised by the theme registry and selection state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("theme '{name}' not found")]
    UnknownTheme { name: String },
}
