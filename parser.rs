//! Match raw instruction data against Anchor discriminators.
//!
//! Anchor instruction data is laid out as `discriminator (8 bytes) || borsh(args)`.

use borsh::BorshDeserialize;
use tracing::debug;

use crate::{
    constants::DISCRIMINATOR_SIZE,
    discriminator::{compute_discriminator, find_matching},
    types::ToolError,
};

/// Split instruction data into its discriminator and argument bytes
pub fn split_discriminator(data: &[u8]) -> Result<([u8; 8], &[u8]), ToolError> {
    if data.len() < DISCRIMINATOR_SIZE {
        return Err(ToolError::InstructionDataTooShort(data.len()));
    }
    let (head, rest) = data.split_at(DISCRIMINATOR_SIZE);
    let mut discriminator = [0u8; DISCRIMINATOR_SIZE];
    discriminator.copy_from_slice(head);
    Ok((discriminator, rest))
}

/// Check whether instruction data is an invocation of `name`
pub fn is_instruction(data: &[u8], name: &str) -> bool {
    match split_discriminator(data) {
        Ok((discriminator, _)) => discriminator == compute_discriminator(name),
        Err(_) => false,
    }
}

/// Identify which of `names` the instruction data invokes
pub fn identify_instruction<'a, S: AsRef<str>>(data: &[u8], names: &'a [S]) -> Option<&'a str> {
    let (discriminator, _) = split_discriminator(data).ok()?;
    find_matching(&discriminator, names)
}

/// Decode the Borsh arguments of instruction `name`.
///
/// Trailing bytes after the arguments are ignored, matching how programs
/// deserialize from a cursor.
pub fn decode_instruction_args<T: BorshDeserialize>(
    data: &[u8],
    name: &str,
) -> Result<T, ToolError> {
    let (discriminator, mut args) = split_discriminator(data)?;
    if discriminator != compute_discriminator(name) {
        return Err(ToolError::DiscriminatorMismatch(name.to_string()));
    }
    debug!(instruction = name, args_len = args.len(), "decoding instruction args");
    T::deserialize(&mut args).map_err(|e| ToolError::ArgsDecode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::{
            DEFAULT_INSTRUCTIONS, INITIALIZE_PERMISSIONLESS_CONSTANT_PRODUCT_POOL_WITH_CONFIG_2_DISC,
        },
        types::PoolLiquidityArgs,
    };

    const CONFIG2: &str = "initialize_permissionless_constant_product_pool_with_config2";

    fn pool_ix_data(args: &PoolLiquidityArgs) -> Vec<u8> {
        let mut data = INITIALIZE_PERMISSIONLESS_CONSTANT_PRODUCT_POOL_WITH_CONFIG_2_DISC.to_vec();
        data.extend_from_slice(&borsh::to_vec(args).unwrap());
        data
    }

    #[test]
    fn test_split_too_short() {
        assert_eq!(
            split_discriminator(&[1, 2, 3]),
            Err(ToolError::InstructionDataTooShort(3))
        );
        assert!(!is_instruction(&[], "swap"));
    }

    #[test]
    fn test_split_discriminator_only() {
        let swap = compute_discriminator("swap");
        let (disc, rest) = split_discriminator(&swap).unwrap();
        assert_eq!(disc, swap);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_identify_instruction() {
        let mut data = compute_discriminator("add_liquidity").to_vec();
        data.extend_from_slice(&100u64.to_le_bytes());

        assert!(is_instruction(&data, "add_liquidity"));
        assert!(!is_instruction(&data, "swap"));
        assert_eq!(
            identify_instruction(&data, &DEFAULT_INSTRUCTIONS),
            Some("add_liquidity")
        );
        assert_eq!(identify_instruction(&data, &["swap"]), None);
    }

    #[test]
    fn test_decode_pool_args() {
        let args = PoolLiquidityArgs {
            token_a_amount: 1_000_000_000,
            token_b_amount: 42,
            activation_point: Some(1_700_000_000),
        };
        let decoded: PoolLiquidityArgs =
            decode_instruction_args(&pool_ix_data(&args), CONFIG2).unwrap();
        assert_eq!(decoded, args);
    }

    #[test]
    fn test_decode_wrong_instruction() {
        let args = PoolLiquidityArgs {
            token_a_amount: 1,
            token_b_amount: 2,
            activation_point: None,
        };
        let result = decode_instruction_args::<PoolLiquidityArgs>(&pool_ix_data(&args), "swap");
        assert_eq!(result, Err(ToolError::DiscriminatorMismatch("swap".to_string())));
    }

    #[test]
    fn test_decode_truncated_args() {
        let mut data = INITIALIZE_PERMISSIONLESS_CONSTANT_PRODUCT_POOL_WITH_CONFIG_2_DISC.to_vec();
        data.extend_from_slice(&5u64.to_le_bytes());
        let result = decode_instruction_args::<PoolLiquidityArgs>(&data, CONFIG2);
        assert!(matches!(result, Err(ToolError::ArgsDecode(_))));
    }
}
