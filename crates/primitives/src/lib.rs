//! SM3 hashing and SM3 Merkle trees
//!
//! This crate provides a from-scratch implementation of the SM3 hash function
//! and a binary Merkle tree built on it.
//!
//! ## Key Components
//!
//! - **SM3**: whole-message hashing ([`digest`], [`Sm3`]) and the public
//!   building blocks it is made of ([`sm3::State`], [`sm3::compress`],
//!   [`sm3::padding`])
//! - **Merkle tree**: domain-separated leaf and node hashing, inclusion
//!   proofs, and predecessor-based absence proofs over sorted leaves
//!   ([`MerkleTree`], [`Proof`], [`AbsenceProof`])
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `parallel` (default): hash large tree levels with rayon
//! - `serde`: serialization of proofs
//!
//! ## Usage Examples
//!
//! ```
//! use sm3kit_primitives::{MerkleTree, digest};
//!
//! let hash = digest(b"abc");
//! assert_eq!(
//!     hash.to_string(),
//!     "0x66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0"
//! );
//!
//! let tree = MerkleTree::new(vec!["alpha", "beta", "gamma"]).unwrap();
//! let proof = tree.generate_proof(2).unwrap();
//! assert!(MerkleTree::verify_proof(b"gamma", 2, &proof, tree.root()));
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-export dependencies that are part of our public API
pub use alloy_primitives::B256;
pub use bytes;

pub mod error;
pub mod merkle;
pub mod sm3;

pub use error::{PrimitivesError, Result};

// Hashing
pub use sm3::{DIGEST_SIZE, Sm3, digest};

// Merkle trees
pub use merkle::{AbsenceProof, MerkleError, MerkleTree, Proof};
