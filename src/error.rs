//! Crate-wide error type.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised by the adapter's setup surface.
///
/// Logging calls themselves never fail; only construction and installation
/// can reject their input.
#[derive(Debug, Error)]
pub enum Error {
    /// A required reference was not supplied.
    #[error("required argument `{0}` was not supplied")]
    MissingArgument(&'static str),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The global tracing subscriber could not be installed.
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(String),
}
