//! Continuing an SM3 chain from a published digest.
//!
//! An SM3 digest is the complete chaining state after the last padded block.
//! Anyone holding `SM3(secret || known)` and the total length of
//! `secret || known` can therefore keep compressing: the result is the
//! digest of `secret || known || glue || extension`, where `glue` is the
//! padding the original computation appended.

use alloy_primitives::B256;
use bytes::{BufMut, Bytes, BytesMut};
use sm3kit_primitives::sm3::{BLOCK_SIZE, State, checked_padded_len, padding};
use tracing::{debug, instrument};

use crate::error::{ForgeError, Result};

/// Number of bytes the original computation compressed: the padded length of
/// an `original_total_length` byte message.
fn absorbed_len(original_total_length: u64) -> Result<u64> {
    usize::try_from(original_total_length)
        .ok()
        .and_then(checked_padded_len)
        .map(|len| len as u64)
        .ok_or(ForgeError::length_overflow(original_total_length))
}

/// The padding appended to an `original_total_length` byte message.
///
/// Splicing it between the original message and the extension yields the
/// message whose legitimate digest equals the forged one.
pub fn glue_padding(original_total_length: u64) -> Result<Vec<u8>> {
    let bit_len = original_total_length
        .checked_mul(8)
        .ok_or(ForgeError::length_overflow(original_total_length))?;
    let tail = (original_total_length % BLOCK_SIZE as u64) as usize;
    Ok(padding(tail, bit_len))
}

/// Forge the digest of `original || glue || extension` from the digest of
/// `original` and its length alone.
#[instrument(skip_all, fields(original_total_length = original_total_length, extension_len = extension.len()))]
pub fn forge_extension(
    original_digest: &B256,
    original_total_length: u64,
    extension: &[u8],
) -> Result<B256> {
    let absorbed = absorbed_len(original_total_length)?;
    let forged_len = absorbed
        .checked_add(extension.len() as u64)
        .ok_or(ForgeError::length_overflow(original_total_length))?;
    let bit_len = forged_len
        .checked_mul(8)
        .ok_or(ForgeError::length_overflow(forged_len))?;

    let mut tail = Vec::with_capacity(extension.len() + 2 * BLOCK_SIZE);
    tail.extend_from_slice(extension);
    tail.extend_from_slice(&padding(extension.len(), bit_len));

    let mut state = State::from_digest(original_digest);
    state.absorb(&tail);

    debug!(absorbed, forged_len, "continued compression from published digest");
    Ok(state.to_digest())
}

/// A published digest together with the length of the message behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthExtension {
    digest: B256,
    original_total_length: u64,
}

/// The outcome of a length extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forgery {
    /// `glue || extension`, to be appended to the original message
    pub suffix: Bytes,
    /// Digest of the original message followed by `suffix`
    pub digest: B256,
}

impl Forgery {
    /// The full forged message for a caller that knows `original`.
    pub fn append_to(&self, original: &[u8]) -> Bytes {
        let mut out = BytesMut::with_capacity(original.len() + self.suffix.len());
        out.put_slice(original);
        out.put_slice(&self.suffix);
        out.freeze()
    }
}

impl LengthExtension {
    /// Start from a digest of an `original_total_length` byte message
    pub const fn new(digest: B256, original_total_length: u64) -> Self {
        Self {
            digest,
            original_total_length,
        }
    }

    /// Start from a digest given as raw bytes, which must be exactly 32 bytes
    pub fn from_slice(digest: &[u8], original_total_length: u64) -> Result<Self> {
        let state = State::from_slice(digest)?;
        Ok(Self::new(state.to_digest(), original_total_length))
    }

    /// The published digest
    pub const fn digest(&self) -> &B256 {
        &self.digest
    }

    /// Length of the message behind the digest
    pub const fn original_total_length(&self) -> u64 {
        self.original_total_length
    }

    /// Append `extension`, producing the suffix and its digest.
    pub fn extend(&self, extension: &[u8]) -> Result<Forgery> {
        let glue = glue_padding(self.original_total_length)?;
        let digest = forge_extension(&self.digest, self.original_total_length, extension)?;

        let mut suffix = BytesMut::with_capacity(glue.len() + extension.len());
        suffix.put_slice(&glue);
        suffix.put_slice(extension);

        Ok(Forgery {
            suffix: suffix.freeze(),
            digest,
        })
    }
}
