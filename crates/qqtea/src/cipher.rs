//! Padding + chaining in one call.

use rand::RngCore;
use tea_core::TeaKey;
use tracing::debug;

use crate::chain::encrypt_padded;
use crate::padding::pad;

/// Encrypts `plaintext` with filler drawn from the thread-local RNG.
pub fn encrypt(plaintext: &[u8], key: &TeaKey) -> Vec<u8> {
    encrypt_with_rng(plaintext, key, &mut rand::thread_rng())
}

/// Encrypts `plaintext` with filler drawn from `rng`.
///
/// Output is fully determined by the plaintext, the key and the bytes `rng`
/// yields.
pub fn encrypt_with_rng<R: RngCore + ?Sized>(
    plaintext: &[u8],
    key: &TeaKey,
    rng: &mut R,
) -> Vec<u8> {
    let padded = pad(plaintext, rng);
    let ciphertext = encrypt_padded(&padded, key);
    debug!(
        plain_len = plaintext.len(),
        cipher_len = ciphertext.len(),
        "qqtea encrypt"
    );
    ciphertext
}

/// QQ-TEA cipher bound to one key and one filler RNG.
pub struct QqTeaCipher<R: RngCore> {
    key: TeaKey,
    rng: R,
}

impl<R: RngCore> QqTeaCipher<R> {
    /// Creates a cipher drawing filler from `rng`.
    pub fn new(key: TeaKey, rng: R) -> Self {
        Self { key, rng }
    }

    /// Encrypts one message. Each call starts from a fresh chain state.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Vec<u8> {
        encrypt_with_rng(plaintext, &self.key, &mut self.rng)
    }

    /// Consumes the cipher and returns its RNG.
    pub fn into_rng(self) -> R {
        self.rng
    }
}
