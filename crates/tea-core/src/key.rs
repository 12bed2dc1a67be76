//! Key type for TEA.

use core::fmt;

/// Size of a [`TeaKey`] in bytes.
pub const KEY_LEN: usize = 16;

/// 128-bit TEA key.
///
/// `Debug` never prints the key material.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TeaKey(pub [u8; KEY_LEN]);

impl TeaKey {
    /// Returns the four big-endian key words `k0..k3`.
    pub fn words(&self) -> [u32; 4] {
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(self.0.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        words
    }
}

impl From<[u8; KEY_LEN]> for TeaKey {
    fn from(value: [u8; KEY_LEN]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for TeaKey {
    type Error = InvalidKeyLength;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; KEY_LEN] = value
            .try_into()
            .map_err(|_| InvalidKeyLength { len: value.len() })?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for TeaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TeaKey(<redacted>)")
    }
}

/// A key slice was not exactly [`KEY_LEN`] bytes long.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidKeyLength {
    /// Length of the rejected slice.
    pub len: usize,
}

impl fmt::Display for InvalidKeyLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TEA key must be {KEY_LEN} bytes, got {}", self.len)
    }
}

impl std::error::Error for InvalidKeyLength {}
