//! # Anchor IX Tools
//!
//! Small utilities for working with Anchor programs on Solana.
//!
//! ## Discriminators
//!
//! Every Anchor instruction starts with an 8-byte discriminator, the first
//! 8 bytes of `sha256("global:<instruction_name>")`. Bots and indexers match
//! raw instruction data against these to recognize e.g. a Meteora pool
//! creation before decoding its Borsh arguments.
//!
//! ```ignore
//! use anchor_ix_tools::{decode_instruction_args, is_instruction, PoolLiquidityArgs};
//!
//! const CREATE: &str = "initialize_permissionless_constant_product_pool_with_config2";
//!
//! if is_instruction(&ix.data, CREATE) {
//!     let args: PoolLiquidityArgs = decode_instruction_args(&ix.data, CREATE)?;
//!     println!("pool seeded with {} / {}", args.token_a_amount, args.token_b_amount);
//! }
//! ```
//!
//! ## Keypairs
//!
//! [`derive_public_key`] decodes a base58 64-byte secret key (seed followed by
//! public key) and returns its public key. The secret is supplied through a
//! [`SecretSource`], never embedded in source.
//!
//! ## Binaries
//!
//! - `discriminators` prints the discriminator of every configured instruction
//! - `public-key` prints the public key for the configured secret

pub mod config;
pub mod constants;
pub mod discriminator;
pub mod keypair;
pub mod parser;
pub mod telemetry;
pub mod types;

// Re-export main public API
pub use config::{Config, SecretSource};
pub use constants::{
    known_discriminator, DEFAULT_INSTRUCTIONS, DISCRIMINATOR_SIZE, KEYPAIR_LENGTH,
    KNOWN_DISCRIMINATORS,
};
pub use discriminator::{
    compute_all, compute_discriminator, find_matching, hash_discriminator, sighash, to_hex,
    DiscriminatorEntry,
};
pub use keypair::{decode_keypair, derive_public_key};
pub use parser::{decode_instruction_args, identify_instruction, is_instruction, split_discriminator};
pub use telemetry::init_tracing;
pub use types::{PoolLiquidityArgs, ToolError};
