//! Message expansion for a single SM3 block.

use byteorder::{BigEndian, ByteOrder};

use super::constants::*;

/// The two word sequences a block expands into.
///
/// `w` holds the 16 block words followed by 52 expansion words, `w_prime[j]`
/// is `w[j] ^ w[j + 4]`. Both live only for the compression of one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedWords {
    /// `W[0..68]`
    pub w: [u32; EXPANDED_WORDS],
    /// `W'[0..64]`
    pub w_prime: [u32; ROUNDS],
}

/// Permutation used by message expansion
#[inline(always)]
pub(crate) const fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

/// Expand one 64-byte block into `W` and `W'`.
#[inline]
pub fn expand(block: &[u8; BLOCK_SIZE]) -> ExpandedWords {
    let mut w = [0u32; EXPANDED_WORDS];
    BigEndian::read_u32_into(block, &mut w[..BLOCK_WORDS]);

    for j in BLOCK_WORDS..EXPANDED_WORDS {
        w[j] = p1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15))
            ^ w[j - 13].rotate_left(7)
            ^ w[j - 6];
    }

    let mut w_prime = [0u32; ROUNDS];
    for (j, word) in w_prime.iter_mut().enumerate() {
        *word = w[j] ^ w[j + 4];
    }

    ExpandedWords { w, w_prime }
}
