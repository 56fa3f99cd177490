//! Inclusion and (sorted-neighbour) absence proofs for the Merkle tree.

use std::ops::Deref;

use alloy_primitives::B256;
use bytes::{BufMut, Bytes, BytesMut};

use super::constants::NODE_SIZE;
use super::error::{MerkleError, Result};
use super::tree::{MerkleTree, hash_node};

/// Fold a leaf hash up through `siblings`.
///
/// The parity of the running index decides whether the current hash is the
/// left or right child on each level.
pub(crate) fn fold_root(leaf_hash: B256, leaf_index: usize, siblings: &[B256]) -> B256 {
    let mut current_hash = leaf_hash;
    let mut current_index = leaf_index;

    for sibling in siblings {
        current_hash = if current_index % 2 == 0 {
            hash_node(&current_hash, sibling)
        } else {
            hash_node(sibling, &current_hash)
        };
        current_index /= 2;
    }

    current_hash
}

/// Sibling digests on the path from a leaf to the root, leaf level first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Proof {
    siblings: Vec<B256>,
}

impl Proof {
    /// Create a proof from sibling digests
    #[inline]
    pub const fn new(siblings: Vec<B256>) -> Self {
        Self { siblings }
    }

    /// The sibling digests
    #[inline]
    pub fn siblings(&self) -> &[B256] {
        &self.siblings
    }

    /// Consume the proof, returning the sibling digests
    #[inline]
    pub fn into_inner(self) -> Vec<B256> {
        self.siblings
    }

    /// Verify this proof for `leaf` at `leaf_index` against `root`
    #[inline]
    pub fn verify(&self, leaf: &[u8], leaf_index: usize, root: impl AsRef<[u8]>) -> bool {
        MerkleTree::verify_proof(leaf, leaf_index, &self.siblings, root)
    }

    /// Encode as the concatenated sibling digests
    pub fn to_bytes(&self) -> Bytes {
        let mut out = BytesMut::with_capacity(self.siblings.len() * NODE_SIZE);
        for sibling in &self.siblings {
            out.put_slice(sibling.as_slice());
        }
        out.freeze()
    }

    /// Decode concatenated sibling digests
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % NODE_SIZE != 0 {
            return Err(MerkleError::InvalidProofEncoding(bytes.len()));
        }

        Ok(Self::new(
            bytes.chunks_exact(NODE_SIZE).map(B256::from_slice).collect(),
        ))
    }
}

impl Deref for Proof {
    type Target = [B256];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.siblings
    }
}

impl From<Vec<B256>> for Proof {
    #[inline]
    fn from(siblings: Vec<B256>) -> Self {
        Self::new(siblings)
    }
}

/// Evidence that `target` is not among a sorted tree's leaves.
///
/// It carries the inclusion proof of `neighbor`, the greatest leaf smaller
/// than `target`. Nothing proves that the leaf after `neighbor` is greater
/// than `target`, so a dishonest prover can pick any smaller leaf. Treat it as
/// a convenience check, not a cryptographic non-membership proof.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbsenceProof {
    /// The value claimed absent
    pub target: Bytes,
    /// The sorted predecessor of `target`
    pub neighbor: Bytes,
    /// Index of `neighbor` in the tree
    pub neighbor_index: usize,
    /// Inclusion proof of `neighbor`
    pub proof: Proof,
}

impl AbsenceProof {
    /// Check that `neighbor` sorts before `target` and is included under `root`
    pub fn verify(&self, root: impl AsRef<[u8]>) -> bool {
        self.neighbor < self.target
            && self
                .proof
                .verify(&self.neighbor, self.neighbor_index, root)
    }
}
