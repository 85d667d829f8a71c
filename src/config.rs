//! # Family Identity & Cryptographic Constants
//!
//! Every constant shared with the external validator network lives here.
//! The family name and version are matched *exactly* by the validator's
//! dispatch table — change them and your transactions are silently routed
//! to nowhere (the validator rejects them, this SDK never hears about it).

/// The Sabre transaction family name. The validator uses this string to
/// route a transaction to the Sabre execution engine.
pub const FAMILY_NAME: &str = "sabre";

/// The Sabre transaction family version. Bumped by the upstream contract
/// runtime on breaking payload-format changes; must track it exactly.
pub const FAMILY_VERSION: &str = "0.5";

// ---------------------------------------------------------------------------
// Cryptographic Parameters
// ---------------------------------------------------------------------------

/// secp256k1 private keys are 32 bytes.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Compressed secp256k1 public keys are 33 bytes (parity byte + x).
pub const PUBLIC_KEY_LENGTH: usize = 33;

/// Compact ECDSA signatures are 64 bytes (r || s), 128 hex characters.
pub const SIGNATURE_LENGTH: usize = 64;

// ---------------------------------------------------------------------------
// Address Format
// ---------------------------------------------------------------------------

/// Total length of a state address in hex characters: a 6-character family
/// prefix plus 64 characters of truncated SHA-512.
pub const ADDRESS_LENGTH: usize = 70;

/// Length of the address prefix identifying the address category.
pub const ADDRESS_PREFIX_LENGTH: usize = 6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_identity_matches_validator_expectations() {
        // These two strings are an external wire contract. If this test
        // fails, someone changed a constant the validator network depends on.
        assert_eq!(FAMILY_NAME, "sabre");
        assert_eq!(FAMILY_VERSION, "0.5");
    }

    #[test]
    fn address_length_is_prefix_plus_hash() {
        assert_eq!(ADDRESS_LENGTH, ADDRESS_PREFIX_LENGTH + 64);
    }
}
