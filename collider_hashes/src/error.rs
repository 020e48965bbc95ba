use thiserror::Error;

/// Errors raised by a hash engine that is used outside of its lifecycle.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashError {
    /// `update` or `digest` was called after the engine was finalized without resetting it in between.
    #[error("hash already computed, the engine must be reset before it can be used again")]
    AlreadyFinalized,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, HashError>;
