//! Cart error types.

use cart_kv::StorageError;
use thiserror::Error;

/// Errors that can occur while setting up or restoring a cart.
///
/// Cart mutations never fail; these only come out of loading,
/// configuration and wiring.
#[derive(Error, Debug)]
pub enum CartError {
    /// The cart was accessed before its provider finished loading.
    #[error("use_cart must be used within an initialized CartProvider")]
    NotInitialized,

    /// A persisted snapshot violates the cart invariants or cannot be parsed.
    #[error("Invalid cart snapshot: {0}")]
    InvalidSnapshot(String),

    /// Storage backend error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The tracing subscriber could not be installed.
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}
