//! Command-line interface for `gme-auth`.

#![forbid(unsafe_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use clap::{Args, Parser, Subcommand};
use gme_auth::{encode_record_at, unix_now, AuthBufferGenerator, AuthSettings, DEFAULT_TTL_SECS};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tea_core::{encrypt_block, Block, TeaKey};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// GME AuthBuffer CLI.
#[derive(Parser)]
#[command(
    name = "gme-auth",
    version,
    author,
    about = "Issue AuthBuffer credentials for GME voice rooms"
)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue an AuthBuffer for a user and room.
    Gen {
        /// User (open) id.
        #[arg(long, short)]
        user: String,
        /// Voice room id.
        #[arg(long, short)]
        room: String,
        #[command(flatten)]
        secret: SecretArgs,
        /// Credential lifetime in seconds.
        #[arg(long, short = 'e')]
        ttl: Option<u32>,
        /// Optional RNG seed for reproducible filler.
        #[arg(long)]
        seed: Option<u64>,
        /// Issue as of this unix time instead of now.
        #[arg(long)]
        now: Option<u32>,
        /// Write the raw ciphertext to stdout instead of base64.
        #[arg(long, default_value_t = false)]
        raw: bool,
    },
    /// Print the plaintext record in hex.
    Record {
        /// User (open) id.
        #[arg(long, short)]
        user: String,
        /// Voice room id.
        #[arg(long, short)]
        room: String,
        /// SDK application id.
        #[arg(long)]
        app_id: u32,
        /// Credential lifetime in seconds.
        #[arg(long, default_value_t = DEFAULT_TTL_SECS)]
        ttl: u32,
        /// Encode as of this unix time instead of now.
        #[arg(long)]
        now: Option<u32>,
    },
    /// QQ-TEA encrypt a file.
    Enc {
        /// TEA key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input file.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Optional RNG seed for reproducible filler.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt a single 8-byte block.
    Block {
        /// TEA key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Block as 16 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
}

/// Where the shared secret and app id come from. Flags override the file.
#[derive(Args)]
struct SecretArgs {
    /// TOML settings file.
    #[arg(long, short, value_name = "FILE", env = "GME_AUTH_CONFIG")]
    config: Option<PathBuf>,
    /// Shared secret; its UTF-8 bytes are the key.
    #[arg(long, env = "GME_AUTH_KEY", hide_env_values = true, conflicts_with = "key_hex")]
    key: Option<String>,
    /// Shared secret as 32 hex characters.
    #[arg(long, value_name = "HEX", env = "GME_AUTH_KEY_HEX", hide_env_values = true)]
    key_hex: Option<String>,
    /// SDK application id.
    #[arg(long, env = "GME_AUTH_APP_ID")]
    app_id: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    match cli.command {
        Commands::Gen {
            user,
            room,
            secret,
            ttl,
            seed,
            now,
            raw,
        } => cmd_gen(&user, &room, &secret, ttl, seed, now, raw),
        Commands::Record {
            user,
            room,
            app_id,
            ttl,
            now,
        } => cmd_record(&user, &room, app_id, ttl, now),
        Commands::Enc {
            key_hex,
            input,
            output,
            seed,
        } => cmd_enc(&key_hex, &input, &output, seed),
        Commands::Block { key_hex, block_hex } => cmd_block(&key_hex, &block_hex),
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise tracing subscriber: {e}"))
}

fn cmd_gen(
    user: &str,
    room: &str,
    secret: &SecretArgs,
    ttl: Option<u32>,
    seed: Option<u64>,
    now: Option<u32>,
    raw: bool,
) -> Result<()> {
    let settings = resolve_settings(secret, ttl)?;
    let config = settings.validate().context("invalid auth settings")?;
    let gen = AuthBufferGenerator::new(config);
    let mut rng = seeded_rng(seed);
    let now = now.unwrap_or_else(unix_now);

    let bytes = gen
        .generate_raw_at(user, room, now, &mut rng)
        .context("issue auth buffer")?;
    info!(
        len = bytes.len(),
        ttl = gen.config().ttl_secs(),
        "auth buffer issued"
    );

    let mut stdout = std::io::stdout().lock();
    if raw {
        stdout.write_all(&bytes).context("write stdout")?;
    } else {
        writeln!(stdout, "{}", STANDARD.encode(&bytes)).context("write stdout")?;
    }
    Ok(())
}

fn cmd_record(user: &str, room: &str, app_id: u32, ttl: u32, now: Option<u32>) -> Result<()> {
    let now = now.unwrap_or_else(unix_now);
    let bytes = encode_record_at(user, room, app_id, ttl, now).context("encode record")?;
    debug!(len = bytes.len(), "record encoded");
    println!("{}", hex::encode(bytes));
    Ok(())
}

fn cmd_enc(key_hex: &str, input_path: &Path, output_path: &Path, seed: Option<u64>) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let ciphertext = qqtea::encrypt_with_rng(&data, &key, &mut seeded_rng(seed));
    fs::write(output_path, &ciphertext)
        .with_context(|| format!("write {}", output_path.display()))?;
    info!(
        plain_len = data.len(),
        cipher_len = ciphertext.len(),
        "file encrypted"
    );
    Ok(())
}

fn cmd_block(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let bytes = hex::decode(block_hex.trim()).context("decode block hex")?;
    let block: Block = match bytes.try_into() {
        Ok(block) => block,
        Err(_) => bail!("block must be 8 bytes (16 hex characters)"),
    };
    println!("{}", hex::encode(encrypt_block(&block, &key)));
    Ok(())
}

/// Merges the settings file (if any) with command-line and environment values.
fn resolve_settings(secret: &SecretArgs, ttl: Option<u32>) -> Result<AuthSettings> {
    let mut settings = match &secret.config {
        Some(path) => AuthSettings::load(path).context("load settings")?,
        None => AuthSettings::default(),
    };
    if secret.key.is_some() || secret.key_hex.is_some() {
        settings.key = secret.key.clone();
        settings.key_hex = secret.key_hex.clone();
    }
    if let Some(app_id) = secret.app_id {
        settings.app_id = Some(app_id);
    }
    if let Some(ttl) = ttl {
        settings.ttl_secs = ttl;
    }
    debug!(?settings, "resolved settings");
    Ok(settings)
}

fn parse_key_hex(hex_str: &str) -> Result<TeaKey> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    if bytes.len() != 16 {
        bail!("TEA key must be 16 bytes (32 hex characters)");
    }
    let mut key = [0u8; 16];
    key.copy_from_slice(&bytes);
    Ok(TeaKey::from(key))
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
