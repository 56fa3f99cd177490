//! Constants used in the Merkle tree implementation

/// Domain-separation byte prepended to leaf data before hashing
pub const LEAF_PREFIX: u8 = 0x00;

/// Domain-separation byte prepended to a pair of child digests before hashing
pub const NODE_PREFIX: u8 = 0x01;

/// Node size in bytes (an SM3 digest)
pub const NODE_SIZE: usize = crate::sm3::DIGEST_SIZE;

/// Levels with at least this many nodes are hashed with rayon
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 1024;
