//! SM3 chaining state

use alloy_primitives::B256;
use byteorder::{BigEndian, ByteOrder};

use super::compress::compress;
use super::constants::*;
use crate::error::Result;

/// The 256-bit chaining value of an SM3 computation.
///
/// A digest is this state serialized as eight big-endian words, so the
/// conversion is reversible: [`State::from_digest`] recovers exactly the
/// state a finished computation stopped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State([u32; STATE_WORDS]);

impl Default for State {
    #[inline]
    fn default() -> Self {
        Self::INITIAL
    }
}

impl State {
    /// The initial chaining value
    pub const INITIAL: Self = Self(IV);

    /// Wrap raw words
    #[inline]
    pub const fn from_words(words: [u32; STATE_WORDS]) -> Self {
        Self(words)
    }

    /// Parse a digest back into the state that produced it
    #[inline]
    pub fn from_digest(digest: &B256) -> Self {
        let mut words = [0u32; STATE_WORDS];
        BigEndian::read_u32_into(digest.as_slice(), &mut words);
        Self(words)
    }

    /// Parse a digest given as a byte slice, checking its length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let digest = B256::try_from(slice)?;
        Ok(Self::from_digest(&digest))
    }

    /// The raw words
    #[inline(always)]
    pub const fn words(&self) -> &[u32; STATE_WORDS] {
        &self.0
    }

    #[inline(always)]
    pub(crate) const fn words_mut(&mut self) -> &mut [u32; STATE_WORDS] {
        &mut self.0
    }

    /// Compress every 64-byte block of `padded` into the state, in order.
    ///
    /// `padded` must already be a whole number of blocks.
    #[inline]
    pub fn absorb(&mut self, padded: &[u8]) {
        debug_assert_eq!(padded.len() % BLOCK_SIZE, 0, "input is not block aligned");

        for block in padded.chunks_exact(BLOCK_SIZE) {
            // chunks_exact only yields BLOCK_SIZE slices
            if let Ok(block) = <&[u8; BLOCK_SIZE]>::try_from(block) {
                compress(self, block);
            }
        }
    }

    /// Serialize the state as a digest
    #[inline]
    #[must_use]
    pub fn to_digest(&self) -> B256 {
        let mut out = B256::ZERO;
        BigEndian::write_u32_into(&self.0, out.as_mut_slice());
        out
    }
}

impl From<State> for B256 {
    #[inline]
    fn from(state: State) -> Self {
        state.to_digest()
    }
}

impl From<&B256> for State {
    #[inline]
    fn from(digest: &B256) -> Self {
        Self::from_digest(digest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrimitivesError;
    use alloy_primitives::b256;

    #[test]
    fn test_initial_state_serialization() {
        assert_eq!(
            State::INITIAL.to_digest(),
            b256!("0x7380166f4914b2b9172442d7da8a0600a96f30bc163138aae38dee4db0fb0e4e")
        );
    }

    #[test]
    fn test_digest_state_conversion_is_reversible() {
        let digest = b256!("0x66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0");
        let state = State::from_digest(&digest);
        assert_eq!(state.words()[0], 0x66c7_f0f4);
        assert_eq!(state.words()[7], 0x8f4b_a8e0);
        assert_eq!(state.to_digest(), digest);
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        let err = State::from_slice(&[0u8; 31]).unwrap_err();
        assert!(matches!(err, PrimitivesError::ArrayConversion(_)));
        assert!(State::from_slice(&[0u8; DIGEST_SIZE]).is_ok());
    }

    #[test]
    fn test_absorb_empty_input_keeps_state() {
        let mut state = State::INITIAL;
        state.absorb(&[]);
        assert_eq!(state, State::INITIAL);
    }
}
