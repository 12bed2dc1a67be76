//! QQ-TEA padding.
//!
//! Layout of a padded stream for a plaintext of `N` bytes:
//!
//! ```text
//! [ header | filler (fill_count - 1) | plaintext (N) | 0x00 x 7 ]
//! ```
//!
//! The low 3 bits of the header hold `fill_count - 2`; its high 5 bits and the
//! filler bytes are random. The total length is always a multiple of 8.

use rand::RngCore;

/// Smallest number of leading header + filler bytes.
pub const MIN_FILL: usize = 2;

/// Largest number of leading header + filler bytes.
pub const MAX_FILL: usize = 9;

/// Number of zero bytes appended after the plaintext.
pub const TRAILER_LEN: usize = 7;

const HEADER_MASK: u8 = 0x07;

/// Returns the header + filler length for a plaintext of `len` bytes.
///
/// This is the unique value in `[MIN_FILL, MAX_FILL]` for which
/// `fill_count + len + TRAILER_LEN` is a multiple of 8.
#[inline]
pub fn fill_count(len: usize) -> usize {
    let rem = (len + TRAILER_LEN + MIN_FILL) % 8;
    if rem == 0 {
        MIN_FILL
    } else {
        MIN_FILL + (8 - rem)
    }
}

/// Returns the padded stream length for a plaintext of `len` bytes.
#[inline]
pub fn padded_len(len: usize) -> usize {
    fill_count(len) + len + TRAILER_LEN
}

/// Pads `plaintext`, drawing the header and filler bytes from `rng`.
///
/// Exactly `fill_count(plaintext.len())` bytes are requested from `rng`, so a
/// deterministic RNG yields a reproducible stream.
pub fn pad<R: RngCore + ?Sized>(plaintext: &[u8], rng: &mut R) -> Vec<u8> {
    let fill = fill_count(plaintext.len());
    let mut out = vec![0u8; fill + plaintext.len() + TRAILER_LEN];

    rng.fill_bytes(&mut out[..fill]);
    out[0] = (out[0] & !HEADER_MASK) | (fill - MIN_FILL) as u8;
    out[fill..fill + plaintext.len()].copy_from_slice(plaintext);

    out
}
