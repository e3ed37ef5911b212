//! Style lookup errors.

use thiserror::Error;

/// Error returned by the fallible lookup and serialization APIs.
///
/// Resolving a part that exists never fails; these only surface when a
/// caller names a widget or part that is not declared.
#[derive(Debug, Error)]
pub enum StyleError {
    /// The preset has no widget with this name.
    #[error("unknown widget '{widget}'. Available: {}", .available.join(", "))]
    UnknownWidget {
        widget: String,
        available: Vec<&'static str>,
    },

    /// The widget declares no part with this name.
    #[error("widget '{widget}' has no part '{part}'. Available: {}", .available.join(", "))]
    UnknownPart {
        widget: &'static str,
        part: String,
        available: Vec<&'static str>,
    },

    /// A widget declares the same part twice, or a preset holds the same widget twice.
    #[error("'{name}' is declared more than once in '{owner}'")]
    Duplicate { owner: String, name: &'static str },

    /// Serializing resolved classes failed.
    #[error("failed to serialize pass-through: {0}")]
    Serialize(#[from] serde_json::Error),
}
