//! Error types for the Toman ledger.

use crate::models::ValidationError;

/// All errors that can occur when using the ledger.
///
/// The amount formatter itself never fails; these errors come from the
/// store, seed loading, configuration, and transaction validation.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// JSON serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading a seed file or other local input failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage backend failed.
    #[error("storage error: {0}")]
    Storage(Box<dyn core::error::Error + Send + Sync>),

    /// No transaction with the given identifier exists.
    #[error("transaction not found: {id}")]
    NotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// A transaction payload was rejected.
    #[error("invalid transaction: {0}")]
    Invalid(#[from] ValidationError),

    /// A date string was not a valid `YYYY-MM-DD` date.
    #[error("invalid date `{input}`: expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },

    /// A configuration value could not be interpreted.
    #[error("invalid configuration value for {key}: {message}")]
    Config {
        /// Environment variable or option name.
        key: &'static str,
        /// Human-readable reason.
        message: String,
    },
}

/// Convenience result type for ledger operations.
pub type Result<T> = core::result::Result<T, LedgerError>;
