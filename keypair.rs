//! Decode base58 secret keys into Solana keypairs.
//!
//! The secret is the standard 64-byte Solana encoding: the 32-byte ed25519 seed
//! followed by the 32-byte public key.

use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};
use tracing::debug;

use crate::{constants::KEYPAIR_LENGTH, types::ToolError};

/// Decode a base58 secret key into a [`Keypair`].
///
/// Surrounding whitespace is ignored so secrets read from files or
/// environment variables with a trailing newline still decode.
///
/// # Errors
///
/// * [`ToolError::Base58Decode`] if the string has characters outside the base58 alphabet
/// * [`ToolError::InvalidKeyLength`] if the decoded bytes are not 64 long
/// * [`ToolError::InvalidKeypair`] if the public half does not belong to the seed
pub fn decode_keypair(base58_secret: &str) -> Result<Keypair, ToolError> {
    let bytes = bs58::decode(base58_secret.trim())
        .into_vec()
        .map_err(|e| ToolError::Base58Decode(e.to_string()))?;

    if bytes.len() != KEYPAIR_LENGTH {
        return Err(ToolError::InvalidKeyLength {
            expected: KEYPAIR_LENGTH,
            actual: bytes.len(),
        });
    }
    debug!(len = bytes.len(), "decoded secret key");

    Keypair::try_from(bytes.as_slice()).map_err(|e| ToolError::InvalidKeypair(e.to_string()))
}

/// Derive the public key embedded in a base58 secret key
pub fn derive_public_key(base58_secret: &str) -> Result<Pubkey, ToolError> {
    let keypair = decode_keypair(base58_secret)?;
    Ok(keypair.pubkey())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    // RFC 8032 test vector 1, seed || public key
    const SECRET: &str =
        "49W385L4rePHy6PAaQUovbD2aacgN4HsKXSMeUzRg4fmwXszN91JuMFrQRj3vMDpZuRF3ZknQBuRBoWQJEfXstMw";
    const PUBLIC: &str = "FVen3X669xLzsi6N2V91DoiyzHzg1uAgqiT8jZ9nS96Z";
    // the 32-byte seed alone
    const SEED_ONLY: &str = "BbMQkQYZspmkytduTWvXEtc4mMURjsekJDvty2WtKeSb";

    #[test]
    fn test_derive_public_key() {
        let pubkey = derive_public_key(SECRET).unwrap();
        assert_eq!(pubkey, Pubkey::from_str(PUBLIC).unwrap());
        assert_eq!(pubkey.to_string(), PUBLIC);
        assert_eq!(pubkey.to_bytes().len(), 32);
    }

    #[test]
    fn test_trailing_newline_ignored() {
        let pubkey = derive_public_key(&format!("{}\n", SECRET)).unwrap();
        assert_eq!(pubkey.to_string(), PUBLIC);
    }

    #[test]
    fn test_invalid_base58_character() {
        let bad = format!("0{}", &SECRET[1..]);
        assert!(matches!(
            derive_public_key(&bad),
            Err(ToolError::Base58Decode(_))
        ));
        assert!(matches!(
            derive_public_key("O"),
            Err(ToolError::Base58Decode(_))
        ));
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            derive_public_key(SEED_ONLY).unwrap_err(),
            ToolError::InvalidKeyLength {
                expected: 64,
                actual: 32
            }
        );
        assert_eq!(
            derive_public_key("").unwrap_err(),
            ToolError::InvalidKeyLength {
                expected: 64,
                actual: 0
            }
        );
    }

    #[test]
    fn test_public_half_mismatch() {
        let mut bytes = bs58::decode(SECRET).into_vec().unwrap();
        bytes[63] ^= 1;
        let tampered = bs58::encode(&bytes).into_string();
        assert!(matches!(
            derive_public_key(&tampered),
            Err(ToolError::InvalidKeypair(_))
        ));
    }

    #[test]
    fn test_decode_keypair_roundtrips_base58() {
        let keypair = decode_keypair(SECRET).unwrap();
        assert_eq!(keypair.to_base58_string(), SECRET);
    }
}
