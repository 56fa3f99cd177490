//! Constants used by the SM3 compression function and padding

/// Digest size in bytes
pub const DIGEST_SIZE: usize = 32;

/// Size of one message block in bytes
pub const BLOCK_SIZE: usize = 64;

/// Size of the trailing big-endian bit-length field appended by padding
pub const LENGTH_FIELD_SIZE: usize = 8;

/// Marker byte that opens the padding (a single `1` bit followed by zeros)
pub const PADDING_MARKER: u8 = 0x80;

/// Number of 32-bit words in the chaining state
pub const STATE_WORDS: usize = 8;

/// Number of compression rounds per block
pub const ROUNDS: usize = 64;

/// Number of 32-bit words in a message block
pub(crate) const BLOCK_WORDS: usize = BLOCK_SIZE / 4;

/// Length of the expanded `W` sequence
pub const EXPANDED_WORDS: usize = ROUNDS + 4;

/// Rounds below this index use the XOR boolean functions and [`T_LOW`]
pub(crate) const LOW_ROUNDS: usize = 16;

/// Initial chaining value
pub const IV: [u32; STATE_WORDS] = [
    0x7380_166f,
    0x4914_b2b9,
    0x1724_42d7,
    0xda8a_0600,
    0xa96f_30bc,
    0x1631_38aa,
    0xe38d_ee4d,
    0xb0fb_0e4e,
];

/// Round constant for rounds 0..16
pub const T_LOW: u32 = 0x79cc_4519;

/// Round constant for rounds 16..64
pub const T_HIGH: u32 = 0x7a87_9d8a;

/// `T_j <<< (j mod 32)` for every round, computed at compile time.
pub(crate) const ROUND_CONSTANTS: [u32; ROUNDS] = round_constants();

const fn round_constants() -> [u32; ROUNDS] {
    let mut table = [0u32; ROUNDS];
    let mut j = 0;
    while j < ROUNDS {
        let t = if j < LOW_ROUNDS { T_LOW } else { T_HIGH };
        table[j] = t.rotate_left((j % 32) as u32);
        j += 1;
    }
    table
}
