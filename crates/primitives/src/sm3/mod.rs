//! SM3 cryptographic hash function.
//!
//! The building blocks are public so that code continuing an SM3 chain from a
//! published digest uses exactly the same compression and padding as
//! [`digest`]:
//!
//! - [`expand`]: message expansion of one block into `W` and `W'`
//! - [`compress`]: one compression of a block into a [`State`]
//! - [`padding`] / [`pad`]: the padding rule
//! - [`State`]: the chaining value and its digest serialization

pub mod compress;
pub mod constants;
pub mod hasher;
pub mod padding;
pub mod schedule;
pub mod state;

pub use compress::compress;
pub use constants::*;
pub use hasher::{Sm3, digest};
pub use padding::{bit_len, checked_padded_len, pad, padded_len, padding};
pub use schedule::{ExpandedWords, expand};
pub use state::State;
