//! Bridge Error Types

use thiserror::Error;

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Bridge-internal errors.
///
/// None of these cross the host boundary: the bridge absorbs and logs them,
/// and the host only ever observes the outcome callbacks. They exist so
/// internal fallible steps still propagate with `?` instead of panicking.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// INIT payload could not be serialized for delivery
    #[error("payload serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
