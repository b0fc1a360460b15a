//! Print Anchor discriminators for a list of instruction names.
//!
//! The preimage is hashed verbatim first and printed as a decimal byte list,
//! then every instruction as `name: [bytes] (hex)`.

use std::path::PathBuf;

use anchor_ix_tools::{
    compute_all, constants::DEFAULT_PREIMAGE, hash_discriminator, init_tracing, Config,
};
use clap::Parser;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "discriminators", about = "Compute Anchor instruction discriminators")]
struct Args {
    /// JSON config file with an `instructions` list
    #[arg(long)]
    config: Option<PathBuf>,

    /// Instruction name to hash; repeat to replace the configured list
    #[arg(short, long = "instruction")]
    instructions: Vec<String>,

    /// Preimage hashed without any namespace prefix
    #[arg(long, default_value = DEFAULT_PREIMAGE)]
    preimage: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    let mut config = Config::load_or_default(args.config.as_deref())?;
    if !args.instructions.is_empty() {
        config.instructions = args.instructions;
        config.validate()?;
    }
    info!(count = config.instructions.len(), "computing discriminators");

    println!("{:?}", hash_discriminator(&args.preimage));

    for entry in compute_all(&config.instructions) {
        println!("{}", entry);
    }

    Ok(())
}
