//! The SM3 compression function.
//!
//! One call folds a 64-byte block into the 256-bit chaining state. All
//! arithmetic is modulo 2^32.

use super::constants::*;
use super::schedule::expand;
use super::state::State;

#[inline(always)]
const fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

#[inline(always)]
const fn ff(j: usize, x: u32, y: u32, z: u32) -> u32 {
    if j < LOW_ROUNDS {
        x ^ y ^ z
    } else {
        (x & y) | (x & z) | (y & z)
    }
}

#[inline(always)]
const fn gg(j: usize, x: u32, y: u32, z: u32) -> u32 {
    if j < LOW_ROUNDS {
        x ^ y ^ z
    } else {
        (x & y) | (!x & z)
    }
}

/// Compress one block into `state`.
///
/// After the 64 rounds the new state is the XOR of the incoming state and the
/// round-evolved register.
#[inline]
pub fn compress(state: &mut State, block: &[u8; BLOCK_SIZE]) {
    let expanded = expand(block);
    let v = state.words();
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *v;

    for j in 0..ROUNDS {
        let a12 = a.rotate_left(12);
        let ss1 = a12
            .wrapping_add(e)
            .wrapping_add(ROUND_CONSTANTS[j])
            .rotate_left(7);
        let ss2 = ss1 ^ a12;
        let tt1 = ff(j, a, b, c)
            .wrapping_add(d)
            .wrapping_add(ss2)
            .wrapping_add(expanded.w_prime[j]);
        let tt2 = gg(j, e, f, g)
            .wrapping_add(h)
            .wrapping_add(ss1)
            .wrapping_add(expanded.w[j]);

        d = c;
        c = b.rotate_left(9);
        b = a;
        a = tt1;
        h = g;
        g = f.rotate_left(19);
        f = e;
        e = p0(tt2);
    }

    let register = [a, b, c, d, e, f, g, h];
    for (word, evolved) in state.words_mut().iter_mut().zip(register) {
        *word ^= evolved;
    }
}
