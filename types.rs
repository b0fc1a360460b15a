//! Error and data types shared by the discriminator and keypair tools.

use borsh::{BorshDeserialize, BorshSerialize};
use thiserror::Error;

/// Error types for the instruction and key tools
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Secret key is not valid base58: {0}")]
    Base58Decode(String),

    #[error("Secret key has {actual} bytes, expected {expected}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Secret key bytes do not form a valid keypair: {0}")]
    InvalidKeypair(String),

    #[error("No secret key available: {0}")]
    MissingSecret(String),

    #[error("Failed to read secret key file: {0}")]
    SecretFile(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Instruction name must not be empty")]
    EmptyInstructionName,

    #[error("Instruction data has {0} bytes, shorter than a discriminator")]
    InstructionDataTooShort(usize),

    #[error("Instruction data does not start with the `{0}` discriminator")]
    DiscriminatorMismatch(String),

    #[error("Failed to decode instruction arguments: {0}")]
    ArgsDecode(String),
}

/// Arguments of the Meteora
/// `initialize_permissionless_constant_product_pool_with_config2` instruction,
/// Borsh-encoded right after the discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct PoolLiquidityArgs {
    /// Initial token A deposit (base units)
    pub token_a_amount: u64,
    /// Initial token B deposit (base units)
    pub token_b_amount: u64,
    /// Slot or timestamp at which trading opens, if scheduled
    pub activation_point: Option<u64>,
}
