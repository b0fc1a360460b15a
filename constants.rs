//! Hardcoded constants for discriminator and keypair handling.
//!
//! Contains the Anchor namespace, byte sizes, the default instruction list and
//! pre-computed discriminators for the Meteora dynamic AMM instructions.

/// Anchor namespace for instruction discriminators
pub const GLOBAL_NAMESPACE: &str = "global";

/// Length of an Anchor instruction discriminator
pub const DISCRIMINATOR_SIZE: usize = 8;

/// Length of a decoded Solana secret key (32-byte seed followed by 32-byte public key)
pub const KEYPAIR_LENGTH: usize = 64;

/// Environment variable holding the base58 secret key by default
pub const DEFAULT_SECRET_ENV: &str = "SECRET_KEY";

/// Preimage hashed verbatim by the `discriminators` binary before the list
pub const DEFAULT_PREIMAGE: &str =
    "global:initialize_permissionless_constant_product_pool_with_config2";

/// Instruction names hashed when no configuration overrides them
pub const DEFAULT_INSTRUCTIONS: [&str; 5] = [
    "swap",
    "add_liquidity",
    "remove_liquidity",
    "create_pool",
    "initialize_permissionless_constant_product_pool_with_config2",
];

/// Meteora dynamic AMM discriminators, sha256("global:<name>")[..8]
pub const SWAP_DISC: [u8; 8] = [248, 198, 158, 145, 225, 117, 135, 200];
pub const ADD_LIQUIDITY_DISC: [u8; 8] = [181, 157, 89, 67, 143, 182, 52, 72];
pub const REMOVE_LIQUIDITY_DISC: [u8; 8] = [80, 85, 209, 72, 24, 206, 177, 108];
pub const CREATE_POOL_DISC: [u8; 8] = [233, 146, 209, 142, 207, 104, 64, 188];
pub const INITIALIZE_PERMISSIONLESS_CONSTANT_PRODUCT_POOL_WITH_CONFIG_2_DISC: [u8; 8] =
    [48, 149, 220, 130, 61, 11, 9, 178];

/// Pre-computed discriminators keyed by instruction name
pub const KNOWN_DISCRIMINATORS: [(&str, [u8; 8]); 5] = [
    ("swap", SWAP_DISC),
    ("add_liquidity", ADD_LIQUIDITY_DISC),
    ("remove_liquidity", REMOVE_LIQUIDITY_DISC),
    ("create_pool", CREATE_POOL_DISC),
    (
        "initialize_permissionless_constant_product_pool_with_config2",
        INITIALIZE_PERMISSIONLESS_CONSTANT_PRODUCT_POOL_WITH_CONFIG_2_DISC,
    ),
];

/// Look up a pre-computed discriminator by instruction name
pub fn known_discriminator(name: &str) -> Option<[u8; 8]> {
    KNOWN_DISCRIMINATORS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, disc)| *disc)
}
