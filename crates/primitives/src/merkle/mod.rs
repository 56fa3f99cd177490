//! Merkle tree over SM3 with inclusion proofs.
//!
//! This module builds a binary Merkle tree level by level from an ordered
//! list of leaves, produces sibling-path proofs and verifies them. Sorted
//! trees additionally support a weak absence proof through the target's
//! sorted predecessor.

pub mod constants;
pub mod error;
pub mod proof;
pub mod tree;

pub use constants::*;
pub use error::{MerkleError, Result};
pub use proof::{AbsenceProof, Proof};
pub use tree::{MerkleTree, hash_leaf, hash_node};
