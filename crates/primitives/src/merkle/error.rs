use thiserror::Error;

/// Result type for Merkle tree operations
pub type Result<T> = std::result::Result<T, MerkleError>;

/// Errors specific to Merkle tree operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    /// A tree needs at least one leaf
    #[error("Cannot build a Merkle tree without leaves")]
    EmptyTree,

    /// Leaf index is past the end of the leaf set
    #[error("Leaf index {index} out of bounds for tree with {leaf_count} leaves")]
    IndexOutOfBounds {
        /// The requested index
        index: usize,
        /// Number of leaves in the tree
        leaf_count: usize,
    },

    /// Encoded proof is not a whole number of digests
    #[error("Invalid proof encoding: {0} bytes is not a multiple of 32")]
    InvalidProofEncoding(usize),

    /// Non-inclusion needs the leaves in sorted order
    #[error("Leaves are not sorted")]
    UnsortedLeaves,

    /// The value asked to be proven absent is a leaf
    #[error("Leaf is present at index {0}")]
    LeafPresent(usize),

    /// The value sorts before every leaf, so there is no neighbour to prove
    #[error("No leaf sorts before the target")]
    NoPredecessor,
}

impl MerkleError {
    /// Shorthand for [`MerkleError::IndexOutOfBounds`]
    pub const fn index_out_of_bounds(index: usize, leaf_count: usize) -> Self {
        Self::IndexOutOfBounds { index, leaf_count }
    }
}
