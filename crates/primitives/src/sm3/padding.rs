//! Message padding.
//!
//! A message of `l` bytes is followed by `0x80`, then zero bytes until the
//! length is 56 mod 64, then the message length in bits as a big-endian
//! `u64`. The padded message is always a whole number of blocks.

use byteorder::{BigEndian, ByteOrder};

use super::constants::*;

/// Length of `message_len` bytes once padded.
///
/// Returns `None` if the padded length does not fit in `usize`.
#[inline]
pub const fn checked_padded_len(message_len: usize) -> Option<usize> {
    match message_len.checked_add(1 + LENGTH_FIELD_SIZE + BLOCK_SIZE - 1) {
        Some(n) => Some(n / BLOCK_SIZE * BLOCK_SIZE),
        None => None,
    }
}

/// Length of `message_len` bytes once padded.
#[inline]
pub const fn padded_len(message_len: usize) -> usize {
    (message_len + 1 + LENGTH_FIELD_SIZE).div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

/// Padding for a tail of `message_len` bytes whose length field encodes `bit_len`.
///
/// `message_len` only decides how many zero bytes are needed to reach a block
/// boundary. `bit_len` is written verbatim, which is what lets a caller pad a
/// tail that continues an already-absorbed prefix.
pub fn padding(message_len: usize, bit_len: u64) -> Vec<u8> {
    let tail = message_len % BLOCK_SIZE;
    let total = padded_len(tail) - tail;

    let mut out = vec![0u8; total];
    out[0] = PADDING_MARKER;
    BigEndian::write_u64(&mut out[total - LENGTH_FIELD_SIZE..], bit_len);
    out
}

/// Bit length of a `message_len` byte message, modulo 2^64.
#[inline]
pub const fn bit_len(message_len: usize) -> u64 {
    (message_len as u64).wrapping_mul(8)
}

/// `message` followed by its padding.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(padded_len(message.len()));
    out.extend_from_slice(message);
    out.extend_from_slice(&padding(message.len(), bit_len(message.len())));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_len_boundaries() {
        assert_eq!(padded_len(0), 64);
        assert_eq!(padded_len(55), 64);
        assert_eq!(padded_len(56), 128);
        assert_eq!(padded_len(63), 128);
        assert_eq!(padded_len(64), 128);
        assert_eq!(padded_len(119), 128);
        assert_eq!(padded_len(120), 192);
    }

    #[test]
    fn test_checked_padded_len() {
        assert_eq!(checked_padded_len(56), Some(128));
        assert_eq!(checked_padded_len(usize::MAX), None);
    }

    #[test]
    fn test_pad_abc() {
        let padded = pad(b"abc");
        assert_eq!(padded.len(), BLOCK_SIZE);
        assert_eq!(&padded[..4], &[b'a', b'b', b'c', 0x80]);
        assert!(padded[4..56].iter().all(|&b| b == 0));
        assert_eq!(&padded[56..], &24u64.to_be_bytes());
    }

    #[test]
    fn test_pad_56_bytes_spills_into_second_block() {
        let message = [0x61u8; 56];
        let padded = pad(&message);
        assert_eq!(padded.len(), 2 * BLOCK_SIZE);
        assert_eq!(padded[56], PADDING_MARKER);
        assert!(padded[57..120].iter().all(|&b| b == 0));
        assert_eq!(&padded[120..], &(56u64 * 8).to_be_bytes());
    }

    #[test]
    fn test_padding_uses_given_bit_length() {
        // A 3-byte tail that continues a 128-byte prefix
        let tail = padding(3, (128 + 3) * 8);
        assert_eq!(tail.len(), BLOCK_SIZE - 3);
        assert_eq!(tail[0], PADDING_MARKER);
        assert_eq!(&tail[tail.len() - 8..], &1048u64.to_be_bytes());
    }

    #[test]
    fn test_padding_is_always_block_aligned() {
        for len in 0..200 {
            let padding = padding(len, bit_len(len));
            assert_eq!((len + padding.len()) % BLOCK_SIZE, 0, "len {len}");
            assert!(padding.len() >= 1 + LENGTH_FIELD_SIZE);
            assert!(padding.len() <= BLOCK_SIZE + LENGTH_FIELD_SIZE);
        }
    }
}
