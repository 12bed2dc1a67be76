//! Generator configuration.
//!
//! [`AuthConfig`] is the validated, immutable form handed to the generator.
//! [`AuthSettings`] is what deployments write down (TOML) before validation.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tea_core::TeaKey;

use crate::error::AuthError;
use crate::record::DEFAULT_TTL_SECS;

/// Validated generator configuration.
///
/// Built once at startup and shared read-only. `Debug` redacts the key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    key: TeaKey,
    app_id: u32,
    ttl_secs: u32,
}

impl AuthConfig {
    /// Creates a configuration from raw key bytes.
    ///
    /// Fails with [`AuthError::Configuration`] unless `key` is exactly 16 bytes.
    pub fn new(key: impl AsRef<[u8]>, app_id: u32) -> Result<Self, AuthError> {
        let key = TeaKey::try_from(key.as_ref())?;
        Ok(Self::from_key(key, app_id))
    }

    /// Creates a configuration from an already sized key.
    pub fn from_key(key: TeaKey, app_id: u32) -> Self {
        Self {
            key,
            app_id,
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }

    /// Overrides the credential lifetime.
    pub fn with_ttl(mut self, ttl_secs: u32) -> Self {
        self.ttl_secs = ttl_secs;
        self
    }

    /// Shared secret.
    pub fn key(&self) -> &TeaKey {
        &self.key
    }

    /// SDK application id.
    pub fn app_id(&self) -> u32 {
        self.app_id
    }

    /// Credential lifetime in seconds.
    pub fn ttl_secs(&self) -> u32 {
        self.ttl_secs
    }
}

/// Unvalidated settings as read from a file.
///
/// ```toml
/// key = "0123456789abcdef"   # or key_hex = "30313233..."
/// app_id = 1400113874
/// ttl_secs = 300
/// ```
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AuthSettings {
    /// Shared secret whose UTF-8 bytes are the key.
    #[serde(default)]
    pub key: Option<String>,

    /// Shared secret as 32 hex characters.
    #[serde(default)]
    pub key_hex: Option<String>,

    /// SDK application id. **Required.**
    #[serde(default)]
    pub app_id: Option<u32>,

    /// Credential lifetime in seconds.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u32,
}

fn default_ttl_secs() -> u32 {
    DEFAULT_TTL_SECS
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            key: None,
            key_hex: None,
            app_id: None,
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("AuthSettings")
            .field("key", &redact(&self.key))
            .field("key_hex", &redact(&self.key_hex))
            .field("app_id", &self.app_id)
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

impl AuthSettings {
    /// Parses settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, AuthError> {
        toml::from_str(text).map_err(|e| AuthError::Settings(e.message().to_owned()))
    }

    /// Reads and parses a TOML settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AuthError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| AuthError::Settings(format!("read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Validates the settings into an [`AuthConfig`].
    pub fn validate(&self) -> Result<AuthConfig, AuthError> {
        let key = match (&self.key, &self.key_hex) {
            (Some(_), Some(_)) => {
                return Err(AuthError::Settings(
                    "set only one of key and key_hex".into(),
                ))
            }
            (Some(text), None) => text.as_bytes().to_vec(),
            (None, Some(hex_str)) => hex::decode(hex_str.trim())
                .map_err(|e| AuthError::Settings(format!("decode key_hex: {e}")))?,
            (None, None) => return Err(AuthError::Settings("no key configured".into())),
        };
        let app_id = self
            .app_id
            .ok_or_else(|| AuthError::Settings("app_id is required".into()))?;
        if self.ttl_secs == 0 {
            return Err(AuthError::Settings("ttl_secs must be non-zero".into()));
        }

        Ok(AuthConfig::new(key, app_id)?.with_ttl(self.ttl_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tea_core::InvalidKeyLength;

    const KEY: &str = "0123456789abcdef";

    #[test]
    fn new_rejects_short_and_long_keys() {
        assert_eq!(
            AuthConfig::new([0u8; 15], 1),
            Err(AuthError::Configuration(InvalidKeyLength { len: 15 }))
        );
        assert_eq!(
            AuthConfig::new([0u8; 17], 1),
            Err(AuthError::Configuration(InvalidKeyLength { len: 17 }))
        );
    }

    #[test]
    fn new_defaults_ttl() {
        let cfg = AuthConfig::new(KEY, 7).unwrap();
        assert_eq!(cfg.ttl_secs(), DEFAULT_TTL_SECS);
        assert_eq!(cfg.app_id(), 7);
        assert_eq!(cfg.key(), &TeaKey::from(*b"0123456789abcdef"));
        assert_eq!(cfg.with_ttl(60).ttl_secs(), 60);
    }

    #[test]
    fn debug_output_hides_key() {
        let cfg = AuthConfig::new(KEY, 7).unwrap();
        assert!(!format!("{cfg:?}").contains(KEY));

        let settings = AuthSettings {
            key: Some(KEY.into()),
            ..Default::default()
        };
        let printed = format!("{settings:?}");
        assert!(!printed.contains(KEY));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn toml_with_plain_key() {
        let settings =
            AuthSettings::from_toml_str("key = \"0123456789abcdef\"\napp_id = 1400113874\n")
                .unwrap();
        assert_eq!(settings.ttl_secs, DEFAULT_TTL_SECS);
        let cfg = settings.validate().unwrap();
        assert_eq!(cfg, AuthConfig::new(KEY, 1_400_113_874).unwrap());
    }

    #[test]
    fn toml_with_hex_key_and_ttl() {
        let settings = AuthSettings::from_toml_str(
            "key_hex = \"000102030405060708090a0b0c0d0e0f\"\napp_id = 5\nttl_secs = 600\n",
        )
        .unwrap();
        let cfg = settings.validate().unwrap();
        assert_eq!(cfg.key().0[15], 0x0f);
        assert_eq!(cfg.ttl_secs(), 600);
    }

    #[test]
    fn toml_rejects_unknown_fields() {
        let err = AuthSettings::from_toml_str("secret = \"x\"\n").unwrap_err();
        assert!(matches!(err, AuthError::Settings(_)));
    }

    #[test]
    fn validate_rejects_incomplete_settings() {
        let missing_key = AuthSettings {
            app_id: Some(1),
            ..Default::default()
        };
        assert!(matches!(
            missing_key.validate(),
            Err(AuthError::Settings(_))
        ));

        let missing_app = AuthSettings {
            key: Some(KEY.into()),
            ..Default::default()
        };
        assert!(matches!(
            missing_app.validate(),
            Err(AuthError::Settings(_))
        ));

        let both = AuthSettings {
            key: Some(KEY.into()),
            key_hex: Some("00".repeat(16)),
            app_id: Some(1),
            ..Default::default()
        };
        assert!(matches!(both.validate(), Err(AuthError::Settings(_))));

        let zero_ttl = AuthSettings {
            key: Some(KEY.into()),
            app_id: Some(1),
            ttl_secs: 0,
            ..Default::default()
        };
        assert!(matches!(zero_ttl.validate(), Err(AuthError::Settings(_))));
    }

    #[test]
    fn validate_reports_wrong_key_length_as_configuration_error() {
        let settings = AuthSettings {
            key: Some("too-short".into()),
            app_id: Some(1),
            ..Default::default()
        };
        assert_eq!(
            settings.validate(),
            Err(AuthError::Configuration(InvalidKeyLength { len: 9 }))
        );
    }

    #[test]
    fn validate_rejects_bad_hex() {
        let settings = AuthSettings {
            key_hex: Some("zz".repeat(16)),
            app_id: Some(1),
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(AuthError::Settings(_))));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "key = \"{KEY}\"").unwrap();
        writeln!(file, "app_id = 42").unwrap();
        let cfg = AuthSettings::load(file.path()).unwrap().validate().unwrap();
        assert_eq!(cfg.app_id(), 42);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = AuthSettings::load("/nonexistent/gme-auth.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/gme-auth.toml"));
    }
}
