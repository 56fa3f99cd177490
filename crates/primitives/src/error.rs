//! Error types for the sm3kit-primitives crate
//!
//! The crate uses a two-level error hierarchy:
//!
//! - `PrimitivesError`: The top-level error type that wraps all other errors
//! - Component-specific errors such as [`MerkleError`](crate::merkle::MerkleError)
//!
//! ## Example Usage
//!
//! ```
//! use sm3kit_primitives::error::{PrimitivesError, Result};
//! use sm3kit_primitives::MerkleTree;
//!
//! fn root_of(leaves: Vec<&'static str>) -> Result<String> {
//!     let tree = MerkleTree::new(leaves)?;
//!     Ok(tree.root().to_string())
//! }
//!
//! match root_of(vec![]) {
//!     Ok(root) => println!("root: {root}"),
//!     Err(PrimitivesError::Merkle(err)) => println!("Merkle error: {err}"),
//!     Err(err) => println!("Other error: {err}"),
//! }
//! ```

use thiserror::Error;

/// Result type for operations in the primitives crate
pub type Result<T> = std::result::Result<T, PrimitivesError>;

/// Main error type for the primitives crate
#[derive(Error, Debug, Clone)]
pub enum PrimitivesError {
    /// Errors from Merkle tree operations
    #[error(transparent)]
    Merkle(#[from] crate::merkle::MerkleError),

    /// A digest or state was given with the wrong number of bytes
    #[error("Array conversion error: {0}")]
    ArrayConversion(#[from] std::array::TryFromSliceError),
}
