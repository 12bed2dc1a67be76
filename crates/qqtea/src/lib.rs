//! QQ-TEA: self-describing padding and proprietary chaining over 16-round TEA.
//!
//! This is the mode the GME AuthBuffer is encrypted with. It resembles CBC but
//! folds an extra plaintext-feedback term into every block (see [`ChainState`]),
//! so a generic CBC implementation over TEA does not interoperate.
//!
//! ```
//! use qqtea::{encrypt, padded_len};
//! use tea_core::TeaKey;
//!
//! let key = TeaKey::from(*b"0123456789abcdef");
//! let ct = encrypt(b"hello", &key);
//! assert_eq!(ct.len(), padded_len(5));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod chain;
mod cipher;
mod padding;

pub use chain::{encrypt_padded, ChainState};
pub use cipher::{encrypt, encrypt_with_rng, QqTeaCipher};
pub use padding::{fill_count, pad, padded_len, MAX_FILL, MIN_FILL, TRAILER_LEN};

#[cfg(test)]
pub(crate) mod test_rng {
    use rand::RngCore;

    /// Yields the bytes `start, start + 1, ...` (wrapping).
    #[derive(Debug, PartialEq, Eq)]
    pub struct SequenceRng(u8);

    impl SequenceRng {
        pub fn new(start: u8) -> Self {
            Self(start)
        }
    }

    impl RngCore for SequenceRng {
        fn next_u32(&mut self) -> u32 {
            let mut buf = [0u8; 4];
            self.fill_bytes(&mut buf);
            u32::from_le_bytes(buf)
        }

        fn next_u64(&mut self) -> u64 {
            let mut buf = [0u8; 8];
            self.fill_bytes(&mut buf);
            u64::from_le_bytes(buf)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for byte in dest {
                *byte = self.0;
                self.0 = self.0.wrapping_add(1);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }
}
