//! Proprietary TEA chaining.
//!
//! This is **not** CBC. Each block is whitened with two independent terms:
//!
//! ```text
//! T_i          = P_i ^ prev_plain ^ prev_cipher
//! C_i          = E(T_i)
//! prev_plain'  = P_i ^ prev_cipher      (the cipher block from i - 1, not C_i)
//! prev_cipher' = C_i
//! ```
//!
//! Plain CBC keeps only `prev_cipher`. The first block encrypts identically under
//! both rules, so a CBC substitution produces output that looks valid but is
//! rejected by the verifier from the second block on.

use tea_core::{encrypt_block, xor_in_place, Block, TeaKey, BLOCK_LEN};

/// Feedback carried between blocks during one encryption call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainState {
    prev_plain: Block,
    prev_cipher: Block,
}

impl ChainState {
    /// Creates the all-zero initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encrypts the next plaintext block and advances the state.
    pub fn encrypt_next(&mut self, plain: &Block, key: &TeaKey) -> Block {
        let mut whitened = *plain;
        xor_in_place(&mut whitened, &self.prev_plain);
        xor_in_place(&mut whitened, &self.prev_cipher);
        let cipher = encrypt_block(&whitened, key);

        let mut feedback = *plain;
        xor_in_place(&mut feedback, &self.prev_cipher);
        self.prev_plain = feedback;
        self.prev_cipher = cipher;

        cipher
    }

    /// Encrypts a whole padded stream from this state.
    ///
    /// # Panics
    ///
    /// Panics if `padded` is not a multiple of 8 bytes long. Streams produced by
    /// [`crate::pad`] always are.
    pub fn encrypt_padded(&mut self, padded: &[u8], key: &TeaKey) -> Vec<u8> {
        assert!(
            padded.len() % BLOCK_LEN == 0,
            "padded stream length {} is not a multiple of {BLOCK_LEN}",
            padded.len()
        );

        let mut out = Vec::with_capacity(padded.len());
        for chunk in padded.chunks_exact(BLOCK_LEN) {
            let block: Block = chunk.try_into().expect("chunk length is eight");
            out.extend_from_slice(&self.encrypt_next(&block, key));
        }
        out
    }
}

/// Encrypts a padded stream starting from a fresh [`ChainState`].
pub fn encrypt_padded(padded: &[u8], key: &TeaKey) -> Vec<u8> {
    ChainState::new().encrypt_padded(padded, key)
}
