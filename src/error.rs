//! Error taxonomy for rillet.
//!
//! Every condition here is raised synchronously at the point of violation.
//! Accessors that panic (e.g. [`Opt::get`](crate::Opt::get)) use the
//! [`Display`](std::fmt::Display) form of a [`StreamError`] as their panic
//! message; the `try_*` counterparts hand the value back instead.

use std::fmt::Debug;

/// Errors raised by optionals, results, and stream collectors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// A value was requested from something that doesn't hold one.
    ///
    /// Raised by [`Opt::get`](crate::Opt::get) on an empty optional, and by
    /// [`Res`](crate::Res) when the value of an error result (or the error of
    /// a value result) is accessed. Always a programming error.
    #[error("unexpected empty value: {context}")]
    UnexpectedEmpty {
        /// Which accessor observed the empty value
        context: &'static str,
    },

    /// Two pairs with the same key reached a non-merging map collector.
    #[error("duplicate values found for key '{key}' - ['{existing}', '{incoming}']")]
    DuplicateKey {
        /// Debug rendering of the colliding key
        key: String,
        /// Value already stored for the key
        existing: String,
        /// Value that collided with it
        incoming: String,
    },

    /// A panic was caught and converted into an error result.
    #[error("recovered from panic: {message}")]
    Recovered {
        /// Panic payload, when it was a string
        message: String,
    },
}

impl StreamError {
    /// Create an unexpected-empty error for the named accessor.
    #[must_use]
    pub const fn unexpected_empty(context: &'static str) -> Self {
        Self::UnexpectedEmpty { context }
    }

    /// Create a duplicate-key error, rendering each part with `Debug`.
    pub fn duplicate_key<K: Debug, V: Debug>(key: &K, existing: &V, incoming: &V) -> Self {
        Self::DuplicateKey {
            key: format!("{key:?}"),
            existing: format!("{existing:?}"),
            incoming: format!("{incoming:?}"),
        }
    }

    /// Create a recovered-panic error with the given message.
    pub fn recovered(message: impl Into<String>) -> Self {
        Self::Recovered {
            message: message.into(),
        }
    }
}

/// Convenience alias for results carrying a [`StreamError`].
pub type Result<T> = std::result::Result<T, StreamError>;
