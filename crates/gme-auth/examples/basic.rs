//! Demonstrates issuing an AuthBuffer and checking its shape.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use gme_auth::{AuthBufferGenerator, AuthConfig};

fn main() -> Result<(), gme_auth::AuthError> {
    // Example secret; real deployments load theirs from settings.
    let config = AuthConfig::new(b"0123456789abcdef", 1_400_113_874)?.with_ttl(600);
    let gen = AuthBufferGenerator::new(config);

    let credential = gen.generate("user-123", "room-456")?;
    let raw = STANDARD.decode(&credential).expect("generator emits valid base64");
    assert_eq!(raw.len() % 8, 0);

    println!("auth buffer: {credential}");
    println!("length: {} bytes", raw.len());
    Ok(())
}
