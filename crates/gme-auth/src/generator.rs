//! AuthBuffer issuing.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::RngCore;
use tracing::debug;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::record::{expire_at, unix_now, AuthRecord};

/// Issues a base64 AuthBuffer for `user_id` in `room_id`.
pub fn generate_auth_buffer(
    config: &AuthConfig,
    user_id: &str,
    room_id: &str,
) -> Result<String, AuthError> {
    AuthBufferGenerator::new(config.clone()).generate(user_id, room_id)
}

/// AuthBuffer issuer bound to one [`AuthConfig`].
///
/// Holds no mutable state; share it freely across threads.
#[derive(Clone, Debug)]
pub struct AuthBufferGenerator {
    config: AuthConfig,
}

impl AuthBufferGenerator {
    /// Creates a generator for `config`.
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Issues a credential using the wall clock and the thread-local RNG.
    pub fn generate(&self, user_id: &str, room_id: &str) -> Result<String, AuthError> {
        self.generate_at(user_id, room_id, unix_now(), &mut rand::thread_rng())
    }

    /// Issues a credential as if at `now`, drawing filler from `rng`.
    pub fn generate_at<R: RngCore + ?Sized>(
        &self,
        user_id: &str,
        room_id: &str,
        now: u32,
        rng: &mut R,
    ) -> Result<String, AuthError> {
        let raw = self.generate_raw_at(user_id, room_id, now, rng)?;
        Ok(STANDARD.encode(raw))
    }

    /// Like [`Self::generate_at`] but returns the ciphertext before base64.
    pub fn generate_raw_at<R: RngCore + ?Sized>(
        &self,
        user_id: &str,
        room_id: &str,
        now: u32,
        rng: &mut R,
    ) -> Result<Vec<u8>, AuthError> {
        let record = AuthRecord {
            user_id,
            room_id,
            app_id: self.config.app_id(),
            expire_at: expire_at(now, self.config.ttl_secs()),
        };
        let plaintext = record.encode()?;
        let ciphertext = qqtea::encrypt_with_rng(&plaintext, self.config.key(), rng);

        debug!(
            user_id_len = user_id.len(),
            room_id_len = room_id.len(),
            expire_at = record.expire_at,
            cipher_len = ciphertext.len(),
            "issued auth buffer"
        );
        Ok(ciphertext)
    }
}
