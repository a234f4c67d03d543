//! Errors surfaced by the key derivation core.

use thiserror::Error;

/// The error type for PRF evaluation and master secret derivation.
///
/// Derivation is deterministic, so none of these are worth retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KdfError {
    /// The caller supplied malformed input, e.g. a 31 byte client random or an
    /// RSA premaster secret too short to hold a client version.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The PRF could not produce output: an unsupported protocol version, an
    /// output length the construction can't reach, or a primitive that could
    /// not be keyed.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),
}

impl KdfError {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        KdfError::InvalidInput(msg.into())
    }

    pub(crate) fn key_derivation(msg: impl Into<String>) -> Self {
        KdfError::KeyDerivation(msg.into())
    }
}
