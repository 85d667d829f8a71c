//! Immutable key value objects.
//!
//! These wrappers carry raw key bytes and hex conversions — nothing more.
//! No curve math, no validation: a [`PrivateKey`] built from arbitrary bytes
//! is accepted here and rejected later by the signing context if it fails
//! the curve's validity predicate. That split keeps the round-trip law
//! simple and total: `from_hex(k.as_hex()) == k` for every even-length hex
//! string, valid key or not.

use std::fmt;

use super::SigningError;

/// An immutable private key: raw bytes plus hex conversions.
///
/// Freely clonable; no shared mutable state. For secp256k1 the expected
/// width is 32 bytes, but length is not enforced at construction — validity
/// is the signing context's concern.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    bytes: Vec<u8>,
}

impl PrivateKey {
    /// Wraps raw private key bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Decodes a private key from hex. Fails with
    /// [`SigningError::InvalidEncoding`] on non-hex or odd-length input.
    pub fn from_hex(hex_str: &str) -> Result<Self, SigningError> {
        let bytes = hex::decode(hex_str)
            .map_err(|e| SigningError::InvalidEncoding(e.to_string()))?;
        Ok(Self { bytes })
    }

    /// Lowercase hex representation of the key bytes.
    pub fn as_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print private key material, not even partially.
        write!(f, "PrivateKey({} bytes)", self.bytes.len())
    }
}

/// An immutable public key: raw bytes plus hex conversions.
///
/// For secp256k1 this is the 33-byte compressed encoding. No point
/// validation happens at construction; an invalid key simply fails to
/// verify anything.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    bytes: Vec<u8>,
}

impl PublicKey {
    /// Wraps raw public key bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Decodes a public key from hex. Fails with
    /// [`SigningError::InvalidEncoding`] on non-hex or odd-length input.
    pub fn from_hex(hex_str: &str) -> Result<Self, SigningError> {
        let bytes = hex::decode(hex_str)
            .map_err(|e| SigningError::InvalidEncoding(e.to_string()))?;
        Ok(Self { bytes })
    }

    /// Lowercase hex representation of the key bytes.
    pub fn as_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.as_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIV_HEX: &str = "2f1e7b7a130d7ba9da0068b3bb0ba1d79e7e77110302c9f746c3c2a63fe40088";
    const PUB_HEX: &str = "026a2c795a9776f75464aa3bda3534c3154a6e91b357b1181d3f515110f84b67c5";

    #[test]
    fn private_key_hex_round_trip() {
        let key = PrivateKey::from_hex(PRIV_HEX).unwrap();
        assert_eq!(key.as_hex(), PRIV_HEX);
        assert_eq!(key.as_bytes().len(), 32);
    }

    #[test]
    fn public_key_hex_round_trip() {
        let key = PublicKey::from_hex(PUB_HEX).unwrap();
        assert_eq!(key.as_hex(), PUB_HEX);
        assert_eq!(key.as_bytes().len(), 33);
    }

    #[test]
    fn round_trip_holds_for_arbitrary_even_length_hex() {
        // The round-trip law is total over even-length hex, including inputs
        // that are not valid curve keys. Validity is the context's job.
        for h in ["", "00", "deadbeef", "ff00ff00ff00"] {
            assert_eq!(PrivateKey::from_hex(h).unwrap().as_hex(), h);
            assert_eq!(PublicKey::from_hex(h).unwrap().as_hex(), h);
        }
    }

    #[test]
    fn uppercase_hex_decodes_to_lowercase() {
        let key = PrivateKey::from_hex("DEADBEEF").unwrap();
        assert_eq!(key.as_hex(), "deadbeef");
    }

    #[test]
    fn odd_length_hex_is_rejected() {
        assert!(matches!(
            PrivateKey::from_hex("abc"),
            Err(SigningError::InvalidEncoding(_))
        ));
        assert!(matches!(
            PublicKey::from_hex("abc"),
            Err(SigningError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn non_hex_input_is_rejected() {
        assert!(matches!(
            PrivateKey::from_hex("not-hex-at-all"),
            Err(SigningError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn keys_from_raw_bytes_round_trip() {
        let key = PrivateKey::new(vec![0xab; 32]);
        assert_eq!(PrivateKey::from_hex(&key.as_hex()).unwrap(), key);
    }

    #[test]
    fn private_key_debug_does_not_leak() {
        let key = PrivateKey::from_hex(PRIV_HEX).unwrap();
        let debug = format!("{:?}", key);
        assert!(!debug.contains(PRIV_HEX));
        assert_eq!(debug, "PrivateKey(32 bytes)");
    }

    #[test]
    fn public_key_display_is_hex() {
        let key = PublicKey::from_hex(PUB_HEX).unwrap();
        assert_eq!(key.to_string(), PUB_HEX);
    }
}
