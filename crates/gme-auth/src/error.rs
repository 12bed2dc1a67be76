//! Error types for AuthBuffer generation.

use tea_core::InvalidKeyLength;
use thiserror::Error;

/// Errors returned while configuring or issuing an AuthBuffer.
///
/// None of these are transient; retrying the same call fails the same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The shared secret is not exactly 16 bytes. A deployment bug.
    #[error("configuration error: {0}")]
    Configuration(#[from] InvalidKeyLength),

    /// An identifier does not fit its 16-bit length prefix.
    #[error("encoding overflow: {field} is {len} bytes, the limit is 65535")]
    EncodingOverflow {
        /// Which record field overflowed.
        field: Field,
        /// UTF-8 byte length of the rejected value.
        len: usize,
    },

    /// Settings could not be read or are incomplete.
    #[error("invalid settings: {0}")]
    Settings(String),
}

/// Variable-length record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The user (open) id.
    UserId,
    /// The voice room id.
    RoomId,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::UserId => f.write_str("user id"),
            Field::RoomId => f.write_str("room id"),
        }
    }
}
