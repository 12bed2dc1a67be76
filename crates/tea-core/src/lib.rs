//! 16-round TEA block encryption.
//!
//! This crate provides the block primitive the GME AuthBuffer is built on:
//! - A 64-bit block, 128-bit key Feistel cipher with the reference TEA round
//!   function, truncated to 16 rounds.
//! - Big-endian word handling on both the block and the key.
//! - Public types shared across the workspace.
//!
//! Only encryption is provided. The implementation is not constant-time
//! hardened and should not be treated as a general purpose cipher.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod key;
mod round;

pub use crate::block::{join_words, split_words, xor_in_place, Block, BLOCK_LEN};
pub use crate::cipher::encrypt_block;
pub use crate::key::{InvalidKeyLength, TeaKey, KEY_LEN};
pub use crate::round::{round, DELTA, ROUNDS};
