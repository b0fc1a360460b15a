//! Print the public key of a base58-encoded 64-byte Solana secret key.
//!
//! The secret is taken from `--secret-file`, then `--secret-key`, then the
//! config's `secret_source` (the `SECRET_KEY` variable when no `--config` is given).

use std::path::PathBuf;

use anchor_ix_tools::{derive_public_key, init_tracing, Config, SecretSource};
use clap::Parser;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "public-key", about = "Derive a Solana public key from a base58 secret key")]
struct Args {
    /// JSON config file with a `secret_source`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base58 secret key; prefer a file or environment variable over the command line
    #[arg(long)]
    secret_key: Option<String>,

    /// File containing the base58 secret key; takes precedence over `--secret-key`
    #[arg(long)]
    secret_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    let secret = match (args.secret_file, args.secret_key) {
        (Some(path), _) => SecretSource::File(path).resolve()?,
        (None, Some(secret)) => secret,
        (None, None) => Config::load_or_default(args.config.as_deref())?
            .secret_source
            .resolve()?,
    };

    let pubkey = derive_public_key(&secret)?;
    info!(%pubkey, "derived public key");
    println!("Public Key: {}", pubkey);

    Ok(())
}
