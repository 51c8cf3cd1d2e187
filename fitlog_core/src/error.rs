//! Error types for the fitlog_core library.

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for history store operations
///
/// Absence of a storage file is not an error; loads over a missing file
/// are successful no-ops.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file that exists could not be read or decoded
    #[error("load failure: {0}")]
    LoadFailure(String),

    /// Data could not be encoded or written to disk
    #[error("save failure: {0}")]
    SaveFailure(String),
}
