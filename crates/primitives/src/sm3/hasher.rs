//! SM3 hasher implementation
//!
//! This module provides [`Sm3`], a hasher that collects a whole message and
//! digests it on finalization, and implements the RustCrypto `digest` traits
//! so it can be used anywhere a [`digest::Digest`] is expected.

use std::io::{self, Write};

use alloy_primitives::B256;
use bytes::{Bytes, BytesMut};
use digest::{FixedOutput, FixedOutputReset, OutputSizeUser, Reset, Update};
use generic_array::{GenericArray, typenum::U32};

use super::padding::pad;
use super::state::State;

/// Hash a complete message.
#[inline]
#[must_use]
pub fn digest(message: &[u8]) -> B256 {
    let mut state = State::INITIAL;
    state.absorb(&pad(message));
    state.to_digest()
}

/// Whole-message SM3 hasher
///
/// Data passed to [`Sm3::update`] is buffered; compression runs when the
/// digest is requested.
#[derive(Debug, Clone, Default)]
pub struct Sm3 {
    buffer: BytesMut,
}

impl Sm3 {
    /// Create an empty hasher
    #[inline]
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::new(),
        }
    }

    /// Append data to the message
    #[inline]
    pub fn update(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Get the amount of data currently buffered
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if no data has been added
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The buffered message
    #[inline]
    #[must_use]
    pub fn data(&self) -> Bytes {
        Bytes::copy_from_slice(&self.buffer)
    }

    /// Compute the digest of the buffered message (non-destructive)
    #[inline]
    #[must_use]
    pub fn sum(&self) -> B256 {
        digest(&self.buffer)
    }

    #[inline(always)]
    fn reset_internal(&mut self) {
        self.buffer.clear();
    }
}

impl Write for Sm3 {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl OutputSizeUser for Sm3 {
    type OutputSize = U32;
}

impl Update for Sm3 {
    #[inline]
    fn update(&mut self, data: &[u8]) {
        self.update(data);
    }
}

impl Reset for Sm3 {
    #[inline]
    fn reset(&mut self) {
        self.reset_internal();
    }
}

impl FixedOutput for Sm3 {
    #[inline]
    fn finalize_into(self, out: &mut GenericArray<u8, Self::OutputSize>) {
        out.copy_from_slice(self.sum().as_slice());
    }
}

impl FixedOutputReset for Sm3 {
    #[inline]
    fn finalize_into_reset(&mut self, out: &mut GenericArray<u8, Self::OutputSize>) {
        out.copy_from_slice(self.sum().as_slice());
        self.reset_internal();
    }
}

impl digest::HashMarker for Sm3 {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::b256;
    use proptest::prelude::*;

    #[test]
    fn test_published_vectors() {
        assert_eq!(
            digest(b""),
            b256!("0x1ab21d8355cfa17f8e61194831e81a8f22bec8c728fefb747ed035eb5082aa2b")
        );
        assert_eq!(
            digest(b"abc"),
            b256!("0x66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0")
        );
        assert_eq!(
            digest(&b"abcd".repeat(16)),
            b256!("0xdebe9ff92275b8a138604889c18e5a4d6fdb70e5387e5765293dcba39c0c5732")
        );
    }

    #[test]
    fn test_digits_fixture() {
        assert_eq!(
            digest(b"123456789"),
            b256!("0xc7ae0aec3d2f9beb84dc1885aa7a576baa7a07b38060afc64c5600f93a5456b5")
        );
    }

    #[test]
    fn test_padding_boundary_fixtures() {
        let cases = [
            (55, b256!("0x288337eef51eec62e7544d7270424c8dbe656254c99852870a73b2453a6a7fb1")),
            (56, b256!("0xba00ebedaab54065a5fd4f9f56326016203166bcee3eed44ea868d59d67aa3c8")),
            (63, b256!("0x587308543551881ebd70d27ad358ff5dcdf24ac54822e2f7b7c3edce0985d21b")),
            (64, b256!("0x616ec433c359e7c2b19f360e2b8f2a1b6e9ed76b8dc1a7d207b31a5341c611e9")),
        ];
        for (len, expected) in cases {
            assert_eq!(digest(&vec![b'a'; len]), expected, "length {len}");
        }
    }

    #[test]
    fn test_hasher_matches_one_shot() {
        let mut hasher = Sm3::new();
        hasher.update(b"ab");
        hasher.update(b"");
        hasher.update(b"c");
        assert_eq!(hasher.len(), 3);
        assert_eq!(hasher.sum(), digest(b"abc"));
        // sum does not consume the buffer
        assert_eq!(hasher.data().as_ref(), b"abc");
    }

    #[test]
    fn test_digest_trait() {
        use digest::Digest;

        let out = <Sm3 as Digest>::digest(b"abc");
        assert_eq!(out.as_slice(), digest(b"abc").as_slice());

        let mut hasher = <Sm3 as Digest>::new();
        Digest::update(&mut hasher, b"abc");
        let first = hasher.finalize_reset();
        assert!(Sm3::is_empty(&hasher));
        assert_eq!(first.as_slice(), digest(b"abc").as_slice());
    }

    #[test]
    fn test_io_write() {
        let mut hasher = Sm3::new();
        hasher.write_all(b"123456789").unwrap();
        hasher.flush().unwrap();
        assert_eq!(hasher.sum(), digest(b"123456789"));
    }

    proptest! {
        #[test]
        fn test_digest_is_deterministic(message in proptest::collection::vec(any::<u8>(), 0..300)) {
            let first = digest(&message);
            prop_assert_eq!(first.len(), 32);
            prop_assert_eq!(first, digest(&message));
        }

        #[test]
        fn test_split_point_does_not_matter(
            message in proptest::collection::vec(any::<u8>(), 0..200),
            split in any::<prop::sample::Index>(),
        ) {
            let at = split.index(message.len() + 1);
            let mut hasher = Sm3::new();
            hasher.update(&message[..at]);
            hasher.update(&message[at..]);
            prop_assert_eq!(hasher.sum(), digest(&message));
        }
    }
}
