//! AuthBuffer plaintext record.
//!
//! Big-endian layout parsed by the remote verifier:
//!
//! | field       | size | value                      |
//! |-------------|------|----------------------------|
//! | version     | 1    | 1                          |
//! | user_id_len | 2    | UTF-8 length of user id    |
//! | user_id     | n    | user id                    |
//! | app_id      | 4    | SDK application id         |
//! | reserved1   | 4    | 0                          |
//! | expire_at   | 4    | unix seconds               |
//! | reserved2   | 4    | 0xFFFFFFFF                 |
//! | reserved3   | 4    | 0                          |
//! | room_id_len | 2    | UTF-8 length of room id    |
//! | room_id     | m    | room id                    |

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{AuthError, Field};

/// Record format version.
pub const RECORD_VERSION: u8 = 1;

/// Reserved word following the app id.
pub const RESERVED1: u32 = 0;

/// Reserved word following the expiry. The verifier expects this literal.
pub const RESERVED2: u32 = 0xffff_ffff;

/// Reserved word preceding the room id.
pub const RESERVED3: u32 = 0;

/// Default credential lifetime in seconds.
pub const DEFAULT_TTL_SECS: u32 = 300;

/// Largest identifier, in UTF-8 bytes, a length prefix can describe.
pub const MAX_FIELD_LEN: usize = u16::MAX as usize;

// version + two length prefixes + five u32 words
const FIXED_LEN: usize = 1 + 2 + 2 + 5 * 4;

/// Logical AuthBuffer record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthRecord<'a> {
    /// User (open) id.
    pub user_id: &'a str,
    /// Voice room id.
    pub room_id: &'a str,
    /// SDK application id.
    pub app_id: u32,
    /// Expiry as unix seconds.
    pub expire_at: u32,
}

impl AuthRecord<'_> {
    /// Length of the encoded record in bytes.
    pub fn encoded_len(&self) -> usize {
        FIXED_LEN + self.user_id.len() + self.room_id.len()
    }

    /// Serializes the record. Identifiers are never truncated.
    pub fn encode(&self) -> Result<Vec<u8>, AuthError> {
        let user_len = prefix_len(Field::UserId, self.user_id)?;
        let room_len = prefix_len(Field::RoomId, self.room_id)?;

        let mut out = Vec::with_capacity(self.encoded_len());
        out.push(RECORD_VERSION);
        out.extend_from_slice(&user_len.to_be_bytes());
        out.extend_from_slice(self.user_id.as_bytes());
        for word in [
            self.app_id,
            RESERVED1,
            self.expire_at,
            RESERVED2,
            RESERVED3,
        ] {
            out.extend_from_slice(&word.to_be_bytes());
        }
        out.extend_from_slice(&room_len.to_be_bytes());
        out.extend_from_slice(self.room_id.as_bytes());
        Ok(out)
    }
}

fn prefix_len(field: Field, value: &str) -> Result<u16, AuthError> {
    u16::try_from(value.len()).map_err(|_| AuthError::EncodingOverflow {
        field,
        len: value.len(),
    })
}

/// Expiry for a credential issued at `now` living `ttl_secs`.
///
/// Wraps like the verifier's unsigned 32-bit field.
#[inline]
pub fn expire_at(now: u32, ttl_secs: u32) -> u32 {
    now.wrapping_add(ttl_secs)
}

/// Current unix time in seconds, truncated to the record's 32-bit field.
pub fn unix_now() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(0)
}

/// Encodes a record expiring `ttl_secs` from now.
pub fn encode_record(
    user_id: &str,
    room_id: &str,
    app_id: u32,
    ttl_secs: u32,
) -> Result<Vec<u8>, AuthError> {
    encode_record_at(user_id, room_id, app_id, ttl_secs, unix_now())
}

/// Encodes a record expiring `ttl_secs` after `now`.
pub fn encode_record_at(
    user_id: &str,
    room_id: &str,
    app_id: u32,
    ttl_secs: u32,
    now: u32,
) -> Result<Vec<u8>, AuthError> {
    AuthRecord {
        user_id,
        room_id,
        app_id,
        expire_at: expire_at(now, ttl_secs),
    }
    .encode()
}
