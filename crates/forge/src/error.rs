//! Error types for forging.

use sm3kit_primitives::PrimitivesError;
use thiserror::Error;

/// Result type for forging operations
pub type Result<T> = std::result::Result<T, ForgeError>;

/// Errors that can occur while forging an extended digest.
#[derive(Debug, Clone, Error)]
pub enum ForgeError {
    /// The original or forged message length does not fit the 64-bit length field.
    #[error("length overflow: a {length} byte message cannot be padded or extended")]
    LengthOverflow {
        /// The offending byte length.
        length: u64,
    },

    /// The published digest could not be parsed into a chaining state.
    #[error(transparent)]
    Primitives(#[from] PrimitivesError),
}

impl ForgeError {
    pub(crate) const fn length_overflow(length: u64) -> Self {
        Self::LengthOverflow { length }
    }
}
