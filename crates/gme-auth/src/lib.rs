//! AuthBuffer credential generator for GME voice rooms.
//!
//! A credential is a QQ-TEA encrypted record naming a user, a room, the SDK
//! application id and an expiry, base64 encoded. The voice SDK passes it
//! unchanged to the join call; the remote verifier decrypts it with the same
//! shared key.
//!
//! ```
//! use gme_auth::{AuthBufferGenerator, AuthConfig};
//!
//! let config = AuthConfig::new(b"0123456789abcdef", 1400113874)?;
//! let credential = AuthBufferGenerator::new(config).generate("user-123", "room-456")?;
//! assert!(!credential.is_empty());
//! # Ok::<(), gme_auth::AuthError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod error;
mod generator;
mod record;

pub use config::{AuthConfig, AuthSettings};
pub use error::{AuthError, Field};
pub use generator::{generate_auth_buffer, AuthBufferGenerator};
pub use record::{
    encode_record, encode_record_at, expire_at, unix_now, AuthRecord, DEFAULT_TTL_SECS,
    MAX_FIELD_LEN, RECORD_VERSION, RESERVED1, RESERVED2, RESERVED3,
};
pub use tea_core::TeaKey;
