//! SM3 Merkle tree construction and proof generation
//!
//! Leaves and internal nodes are hashed with distinct prefix bytes so a leaf
//! can never be passed off as an internal node. A level with an odd number of
//! nodes pairs its last node with itself.

use alloy_primitives::B256;
use bytes::Bytes;
use tracing::{debug, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::constants::*;
use super::error::{MerkleError, Result};
use super::proof::{AbsenceProof, Proof, fold_root};
use crate::sm3::Sm3;

/// Hash leaf data: `SM3(0x00 || data)`
#[inline]
#[must_use]
pub fn hash_leaf(data: &[u8]) -> B256 {
    let mut hasher = Sm3::new();
    hasher.update(&[LEAF_PREFIX]);
    hasher.update(data);
    hasher.sum()
}

/// Hash two children: `SM3(0x01 || left || right)`
#[inline]
#[must_use]
pub fn hash_node(left: &B256, right: &B256) -> B256 {
    let mut hasher = Sm3::new();
    hasher.update(&[NODE_PREFIX]);
    hasher.update(left.as_slice());
    hasher.update(right.as_slice());
    hasher.sum()
}

/// Hash one pair of a level, duplicating a lone trailing node
#[inline(always)]
fn hash_pair(pair: &[B256]) -> B256 {
    let left = &pair[0];
    let right = pair.get(1).unwrap_or(left);
    hash_node(left, right)
}

fn hash_leaves(leaves: &[Bytes]) -> Vec<B256> {
    #[cfg(feature = "parallel")]
    if leaves.len() >= PARALLEL_THRESHOLD {
        return leaves.par_iter().map(|leaf| hash_leaf(leaf)).collect();
    }

    leaves.iter().map(|leaf| hash_leaf(leaf)).collect()
}

fn next_level(level: &[B256]) -> Vec<B256> {
    #[cfg(feature = "parallel")]
    if level.len() >= PARALLEL_THRESHOLD {
        return level.par_chunks(2).map(hash_pair).collect();
    }

    level.chunks(2).map(hash_pair).collect()
}

/// A Merkle tree over an ordered set of byte strings.
///
/// `levels[0]` holds the leaf hashes and the last level holds only the root.
/// Levels are stored as built, without the duplicated trailing node.
///
/// Non-inclusion proofs are only meaningful when the leaves are sorted; use
/// [`MerkleTree::from_unsorted`] when the input order does not matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    leaves: Vec<Bytes>,
    levels: Vec<Vec<B256>>,
}

impl MerkleTree {
    /// Build a tree over `leaves`, keeping their order.
    #[instrument(skip_all, name = "merkle::build")]
    pub fn new<I, L>(leaves: I) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<Bytes>,
    {
        let leaves: Vec<Bytes> = leaves.into_iter().map(Into::into).collect();
        if leaves.is_empty() {
            return Err(MerkleError::EmptyTree);
        }

        let mut levels = vec![hash_leaves(&leaves)];
        while let Some(level) = levels.last().filter(|level| level.len() > 1) {
            let parent = next_level(level);
            levels.push(parent);
        }

        debug!(
            leaf_count = leaves.len(),
            depth = levels.len() - 1,
            "built merkle tree"
        );

        Ok(Self { leaves, levels })
    }

    /// Sort `leaves` and build a tree over them.
    pub fn from_unsorted<I, L>(leaves: I) -> Result<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<Bytes>,
    {
        let mut leaves: Vec<Bytes> = leaves.into_iter().map(Into::into).collect();
        leaves.sort_unstable();
        Self::new(leaves)
    }

    /// The root digest
    #[inline]
    pub fn root(&self) -> B256 {
        // new() never produces an empty level list or an empty root level
        self.levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or_default()
    }

    /// Number of leaves
    #[inline(always)]
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Number of levels below the root, which is also the length of every proof
    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// The leaves in tree order
    #[inline]
    pub fn leaves(&self) -> &[Bytes] {
        &self.leaves
    }

    /// The leaf at `index`
    #[inline]
    pub fn leaf(&self, index: usize) -> Option<&Bytes> {
        self.leaves.get(index)
    }

    /// All levels, leaf hashes first
    #[inline]
    pub fn levels(&self) -> &[Vec<B256>] {
        &self.levels
    }

    /// Whether the leaves are in ascending byte order
    pub fn is_sorted(&self) -> bool {
        self.leaves.is_sorted()
    }

    /// Index of `data` among the leaves.
    ///
    /// Uses binary search, so the answer is only reliable for sorted trees.
    pub fn position(&self, data: &[u8]) -> Option<usize> {
        self.leaves
            .binary_search_by(|leaf| leaf.as_ref().cmp(data))
            .ok()
    }

    /// Generate the inclusion proof for the leaf at `leaf_index`.
    ///
    /// Each entry is the sibling at `index ^ 1` on that level. When the
    /// sibling does not exist the node is its own sibling, matching the
    /// duplication used while building.
    pub fn generate_proof(&self, leaf_index: usize) -> Result<Proof> {
        if leaf_index >= self.leaf_count() {
            return Err(MerkleError::index_out_of_bounds(
                leaf_index,
                self.leaf_count(),
            ));
        }

        let mut siblings = Vec::with_capacity(self.depth());
        let mut index = leaf_index;
        for level in &self.levels[..self.depth()] {
            let sibling = level.get(index ^ 1).unwrap_or(&level[index]);
            siblings.push(*sibling);
            index /= 2;
        }

        trace!(leaf_index, len = siblings.len(), "generated inclusion proof");
        Ok(Proof::new(siblings))
    }

    /// Check that `leaf` sits at `leaf_index` under `root`.
    ///
    /// Never fails: a root that is not 32 bytes, an index with more bits than
    /// the proof has levels, or a mismatching fold all give `false`.
    pub fn verify_proof(
        leaf: &[u8],
        leaf_index: usize,
        proof: &[B256],
        root: impl AsRef<[u8]>,
    ) -> bool {
        let Ok(root) = B256::try_from(root.as_ref()) else {
            return false;
        };
        if leaf_index.checked_shr(proof.len() as u32).unwrap_or(0) != 0 {
            return false;
        }

        fold_root(hash_leaf(leaf), leaf_index, proof) == root
    }

    /// [`MerkleTree::verify_proof`] for arguments that may be missing or
    /// still encoded. Any absent argument or a proof whose length is not a
    /// multiple of 32 bytes gives `false`.
    pub fn verify_encoded(
        leaf: Option<&[u8]>,
        leaf_index: Option<usize>,
        proof: Option<&[u8]>,
        root: Option<&[u8]>,
    ) -> bool {
        let (Some(leaf), Some(leaf_index), Some(proof), Some(root)) =
            (leaf, leaf_index, proof, root)
        else {
            return false;
        };

        match Proof::from_bytes(proof) {
            Ok(proof) => Self::verify_proof(leaf, leaf_index, &proof, root),
            Err(_) => false,
        }
    }

    /// Prove that `target` is not a leaf by proving its sorted predecessor.
    ///
    /// This shows the greatest leaf below `target` is in the tree. It does
    /// not bind the next leaf, so it is not a real non-membership proof.
    pub fn prove_absence(&self, target: &[u8]) -> Result<AbsenceProof> {
        if !self.is_sorted() {
            return Err(MerkleError::UnsortedLeaves);
        }

        let neighbor_index = match self
            .leaves
            .binary_search_by(|leaf| leaf.as_ref().cmp(target))
        {
            Ok(index) => return Err(MerkleError::LeafPresent(index)),
            Err(0) => return Err(MerkleError::NoPredecessor),
            Err(insert_at) => insert_at - 1,
        };

        debug!(neighbor_index, "proving absence through predecessor");

        Ok(AbsenceProof {
            target: Bytes::copy_from_slice(target),
            neighbor: self.leaves[neighbor_index].clone(),
            neighbor_index,
            proof: self.generate_proof(neighbor_index)?,
        })
    }
}
