//! Errors raised by key generation, signing, verification and decoding.
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong outside of a plain signature mismatch, which
/// is reported by [`crate::Verifier::verify`] returning `false`.
#[derive(Error, Debug)]
pub enum Error {
    /// The key size, element size and digest size do not line up.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A key half or signature is shorter than the configured key size.
    #[error("index {index} out of range for {what} of length {len}")]
    OutOfRange {
        /// Position that was requested.
        index: usize,
        /// Number of entries actually present.
        len: usize,
        /// Which structure was indexed.
        what: &'static str,
    },

    /// The randomness source failed to produce bytes.
    #[error("randomness source failed: {0}")]
    Randomness(#[from] rand::Error),

    /// An encoded key or signature does not have the exact expected length.
    #[error("cannot decode {what}: expected {expected} bytes, got {actual}")]
    Decode {
        /// Which structure was being decoded.
        what: &'static str,
        /// Length required by the configuration.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },

    /// Hex text could not be turned into bytes.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// A hash algorithm name was not recognised.
    #[error("unknown hash algorithm: {0}")]
    UnknownHash(String),
}

impl Error {
    pub(crate) fn configuration(msg: impl std::fmt::Display) -> Self {
        Self::Configuration(msg.to_string())
    }
}
