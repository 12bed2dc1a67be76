//! Single-block TEA encryption.

use crate::block::{join_words, split_words, Block};
use crate::key::TeaKey;
use crate::round::{round, DELTA, ROUNDS};

/// Encrypts a single 8-byte block under `key`.
///
/// Both lengths are fixed by the argument types, so there is no failure mode.
pub fn encrypt_block(block: &Block, key: &TeaKey) -> Block {
    let k = key.words();
    let (mut v0, mut v1) = split_words(block);
    let mut sum = 0u32;

    for _ in 0..ROUNDS {
        sum = sum.wrapping_add(DELTA);
        (v0, v1) = round(v0, v1, sum, &k);
    }

    join_words(v0, v1)
}
