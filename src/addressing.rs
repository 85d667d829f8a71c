//! # State Address Derivation
//!
//! Deterministic hex addresses for the three Sabre state-address categories:
//!
//! | Category           | Prefix   | Hash input                      |
//! |--------------------|----------|---------------------------------|
//! | Namespace registry | `00ec00` | first 6 chars of the namespace  |
//! | Contract registry  | `00ec01` | contract name                   |
//! | Contract           | `00ec02` | `"<name>,<version>"`            |
//!
//! Each address is the category prefix followed by the first 64 hex
//! characters of a SHA-512 digest — 70 lowercase hex characters total.
//! Validator nodes recompute these from the same inputs and must match
//! byte for byte, so there is no room for creativity here.
//!
//! All functions are pure and total over their valid inputs: no state,
//! no I/O, safe to call from any number of threads.
//!
//! ## Short namespaces
//!
//! Only the first 6 characters of a namespace participate in derivation.
//! A namespace shorter than 6 characters is rejected with
//! [`AddressError::NamespaceTooShort`] rather than hashed as-is: two short
//! namespaces sharing a prefix would silently collide, and a collision here
//! means two unrelated contracts reading each other's state.

use sha2::{Digest, Sha512};
use thiserror::Error;

use crate::config::ADDRESS_PREFIX_LENGTH;

/// Prefix for namespace registry addresses in global state.
pub const NAMESPACE_REGISTRY_PREFIX: &str = "00ec00";

/// Prefix for contract registry addresses in global state.
pub const CONTRACT_REGISTRY_PREFIX: &str = "00ec01";

/// Prefix for contract addresses in global state.
pub const CONTRACT_PREFIX: &str = "00ec02";

/// Errors raised when an address cannot be derived from the given inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The namespace has fewer than 6 characters. Only the first 6 take part
    /// in derivation, so anything shorter is ambiguous by construction.
    #[error("namespace must be at least 6 characters, got {0:?}")]
    NamespaceTooShort(String),

    /// A contract name was empty.
    #[error("contract name must not be empty")]
    EmptyName,

    /// A contract version was empty.
    #[error("contract version must not be empty")]
    EmptyVersion,
}

/// First 64 hex characters of the SHA-512 digest of `input`.
fn hash_64(input: &str) -> String {
    let digest = Sha512::digest(input.as_bytes());
    hex::encode(digest)[..64].to_string()
}

/// Computes the registry address for a namespace.
///
/// `00ec00` + first 64 hex chars of `SHA-512(namespace[..6])`. Only the
/// 6-character prefix matters: `"abcdef"` and `"abcdef-anything"` share a
/// registry address, which is deliberate — the registry governs the whole
/// prefix. Callers are responsible for keeping 6-character prefixes unique
/// within a deployment.
///
/// # Example
///
/// ```
/// use sabre_sdk::addressing::namespace_registry_address;
///
/// let addr = namespace_registry_address("abcdef").unwrap();
/// assert!(addr.starts_with("00ec00"));
/// assert_eq!(addr.len(), 70);
/// ```
pub fn namespace_registry_address(namespace: &str) -> Result<String, AddressError> {
    let prefix: String = namespace.chars().take(ADDRESS_PREFIX_LENGTH).collect();
    if prefix.chars().count() < ADDRESS_PREFIX_LENGTH {
        return Err(AddressError::NamespaceTooShort(namespace.to_string()));
    }
    Ok(format!("{}{}", NAMESPACE_REGISTRY_PREFIX, hash_64(&prefix)))
}

/// Computes the address of a specific version of a contract.
///
/// `00ec02` + first 64 hex chars of `SHA-512("<name>,<version>")`. The
/// literal comma separator is part of the wire contract — it is how the
/// validator distinguishes `("a", "1.0")` from `("a1", ".0")`.
pub fn contract_address(name: &str, version: &str) -> Result<String, AddressError> {
    if name.is_empty() {
        return Err(AddressError::EmptyName);
    }
    if version.is_empty() {
        return Err(AddressError::EmptyVersion);
    }
    let input = format!("{},{}", name, version);
    Ok(format!("{}{}", CONTRACT_PREFIX, hash_64(&input)))
}

/// Computes the registry address for a contract name.
///
/// `00ec01` + first 64 hex chars of `SHA-512(name)`. The registry address
/// depends on the name alone; every version of a contract shares one
/// registry entry.
pub fn contract_registry_address(name: &str) -> Result<String, AddressError> {
    if name.is_empty() {
        return Err(AddressError::EmptyName);
    }
    Ok(format!("{}{}", CONTRACT_REGISTRY_PREFIX, hash_64(name)))
}
