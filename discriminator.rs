//! Anchor instruction discriminator utilities.
//!
//! An Anchor program tags every instruction with the first 8 bytes of
//! `sha256("<namespace>:<name>")`; instructions use the `global` namespace.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::constants::{DISCRIMINATOR_SIZE, GLOBAL_NAMESPACE};

/// Hash a preimage verbatim and keep the first 8 bytes.
///
/// Unlike [`compute_discriminator`] no namespace is prepended, so
/// `hash_discriminator("global:swap") == compute_discriminator("swap")`.
pub fn hash_discriminator(preimage: &str) -> [u8; 8] {
    let mut hasher = Sha256::new();
    hasher.update(preimage.as_bytes());
    let hash_result = hasher.finalize();
    let mut discriminator = [0u8; DISCRIMINATOR_SIZE];
    discriminator.copy_from_slice(&hash_result[..DISCRIMINATOR_SIZE]);
    discriminator
}

/// Compute sha256("<namespace>:<name>")[0..8]
pub fn sighash(namespace: &str, name: &str) -> [u8; 8] {
    hash_discriminator(&format!("{}:{}", namespace, name))
}

/// Compute Anchor instruction discriminator: sha256("global:<name>")[0..8]
///
/// # Arguments
///
/// * `name` - The instruction name (e.g., "swap", "create_pool")
///
/// # Example
///
/// ```
/// use anchor_ix_tools::compute_discriminator;
///
/// assert_eq!(
///     compute_discriminator("swap"),
///     [248, 198, 158, 145, 225, 117, 135, 200]
/// );
/// ```
pub fn compute_discriminator(name: &str) -> [u8; 8] {
    sighash(GLOBAL_NAMESPACE, name)
}

/// Lowercase hex rendering of a discriminator, no separators
pub fn to_hex(discriminator: &[u8; 8]) -> String {
    hex::encode(discriminator)
}

/// An instruction name together with its discriminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscriminatorEntry {
    pub name: String,
    pub discriminator: [u8; 8],
}

impl DiscriminatorEntry {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            discriminator: compute_discriminator(name),
        }
    }

    pub fn hex(&self) -> String {
        to_hex(&self.discriminator)
    }
}

impl fmt::Display for DiscriminatorEntry {
    /// Formats as `name: [b0, b1, ...] (hex)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?} ({})", self.name, self.discriminator, self.hex())
    }
}

/// Compute discriminators for every name, preserving order
pub fn compute_all<S: AsRef<str>>(names: &[S]) -> Vec<DiscriminatorEntry> {
    names
        .iter()
        .map(|name| DiscriminatorEntry::new(name.as_ref()))
        .collect()
}

/// Find which candidate instruction name produces `target`
pub fn find_matching<'a, S: AsRef<str>>(
    target: &[u8; 8],
    candidates: &'a [S],
) -> Option<&'a str> {
    candidates
        .iter()
        .find(|name| compute_discriminator(name.as_ref()) == *target)
        .map(|name| name.as_ref())
}
