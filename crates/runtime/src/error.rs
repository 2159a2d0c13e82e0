//! Error handling for the Javalette runtime

use thiserror::Error;

/// Failure of a read primitive, before it is collapsed to the sentinel at
/// the C ABI boundary.
///
/// The `Display` output of each variant is exactly the diagnostic line the
/// runtime writes to stderr, so the message format lives in one place.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The line read from stdin is not a valid number.
    #[error("Not a valid number: {raw}")]
    Parse { raw: String },

    /// The underlying input stream failed.
    #[error("Unexpected IO ERROR: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ReadError>;
