//! secp256k1 signing context.
//!
//! ECDSA over secp256k1 with a SHA-256 message digest and RFC 6979
//! deterministic nonces — the same (message, key) pair always produces the
//! same 64-byte compact signature, which is what makes the golden test
//! vectors below possible. Signatures travel as 128 lowercase hex
//! characters.
//!
//! The heavy lifting is delegated to the audited `secp256k1` bindings
//! (libsecp256k1, the implementation Bitcoin runs on). This module only
//! adapts bytes in and hex out.

use rand::rngs::OsRng;
use rand::RngCore;
use secp256k1::ecdsa::Signature;
use secp256k1::{All, Message, Secp256k1, SecretKey};
use sha2::{Digest, Sha256};

use super::{Context, PrivateKey, PublicKey, SigningError};
use crate::config::PRIVATE_KEY_LENGTH;

/// The [`Context`] implementation for secp256k1.
///
/// Stateless apart from libsecp256k1's precomputed tables; build one and
/// share it everywhere. [`Signer::new`](super::Signer::new) constructs one
/// internally when no explicit context is supplied.
pub struct Secp256k1Context {
    secp: Secp256k1<All>,
}

impl Secp256k1Context {
    /// Creates a context with precomputed signing and verification tables.
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
        }
    }

    fn secret_key(&self, private_key: &PrivateKey) -> Result<SecretKey, SigningError> {
        SecretKey::from_slice(private_key.as_bytes()).map_err(|_| SigningError::InvalidKey)
    }
}

impl Default for Secp256k1Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context for Secp256k1Context {
    fn algorithm_name(&self) -> &str {
        "secp256k1"
    }

    fn sign(&self, message: &[u8], private_key: &PrivateKey) -> Result<String, SigningError> {
        let key = self.secret_key(private_key)?;
        let digest = Sha256::digest(message);
        let msg = Message::from_slice(&digest).map_err(|_| SigningError::InvalidMessage)?;
        let signature = self.secp.sign_ecdsa(&msg, &key);
        Ok(hex::encode(signature.serialize_compact()))
    }

    fn verify(&self, signature: &str, message: &[u8], public_key: &PublicKey) -> bool {
        // Any malformed input verifies as false; this path never errors.
        let Ok(raw) = hex::decode(signature) else {
            return false;
        };
        let Ok(signature) = Signature::from_compact(&raw) else {
            return false;
        };
        let Ok(key) = secp256k1::PublicKey::from_slice(public_key.as_bytes()) else {
            return false;
        };
        let digest = Sha256::digest(message);
        let Ok(msg) = Message::from_slice(&digest) else {
            return false;
        };
        self.secp.verify_ecdsa(&msg, &signature, &key).is_ok()
    }

    fn get_public_key(&self, private_key: &PrivateKey) -> Result<PublicKey, SigningError> {
        let key = self.secret_key(private_key)?;
        let public = secp256k1::PublicKey::from_secret_key(&self.secp, &key);
        Ok(PublicKey::new(public.serialize().to_vec()))
    }

    fn new_random_private_key(&self) -> PrivateKey {
        // Rejection sampling: draw 32 bytes from the OS CSPRNG until they
        // form a valid scalar (non-zero, below the group order). The retry
        // probability is ~2^-128, so this loop runs once in any universe
        // we care about.
        let mut candidate = [0u8; PRIVATE_KEY_LENGTH];
        loop {
            OsRng.fill_bytes(&mut candidate);
            if SecretKey::from_slice(&candidate).is_ok() {
                return PrivateKey::new(candidate.to_vec());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY1_PRIV_HEX: &str = "2f1e7b7a130d7ba9da0068b3bb0ba1d79e7e77110302c9f746c3c2a63fe40088";
    const KEY1_PUB_HEX: &str = "026a2c795a9776f75464aa3bda3534c3154a6e91b357b1181d3f515110f84b67c5";

    const KEY2_PRIV_HEX: &str = "51b845c2cdde22fe646148f0b51eaf5feec8c82ee921d5e0cbe7619f3bb9c62d";
    const KEY2_PUB_HEX: &str = "039c20a66b4ec7995391dbec1d8bb0e2c6e6fd63cd259ed5b877cb4ea98858cf6d";

    const MSG1: &[u8] = b"test";
    const MSG1_KEY1_SIG: &str = "5195115d9be2547b720ee74c23dd841842875db6eae1f5da8605b050a49e\
                                 702b4aa83be72ab7e3cb20f17c657011b49f4c8632be2745ba4de79e6aa0\
                                 5da57b35";

    #[test]
    fn algorithm_name() {
        assert_eq!(Secp256k1Context::new().algorithm_name(), "secp256k1");
    }

    #[test]
    fn public_key_derivation_golden_vectors() {
        let context = Secp256k1Context::new();

        let key1 = PrivateKey::from_hex(KEY1_PRIV_HEX).unwrap();
        let key2 = PrivateKey::from_hex(KEY2_PRIV_HEX).unwrap();

        assert_eq!(context.get_public_key(&key1).unwrap().as_hex(), KEY1_PUB_HEX);
        assert_eq!(context.get_public_key(&key2).unwrap().as_hex(), KEY2_PUB_HEX);
    }

    #[test]
    fn signing_golden_vector() {
        let context = Secp256k1Context::new();
        let key = PrivateKey::from_hex(KEY1_PRIV_HEX).unwrap();

        let signature = context.sign(MSG1, &key).unwrap();
        assert_eq!(signature, MSG1_KEY1_SIG);
    }

    #[test]
    fn signing_is_deterministic() {
        let context = Secp256k1Context::new();
        let key = context.new_random_private_key();

        let a = context.sign(b"determinism", &key).unwrap();
        let b = context.sign(b"determinism", &key).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn verify_accepts_matching_public_key() {
        let context = Secp256k1Context::new();
        let key = PrivateKey::from_hex(KEY1_PRIV_HEX).unwrap();
        let public_key = PublicKey::from_hex(KEY1_PUB_HEX).unwrap();

        let signature = context.sign(MSG1, &key).unwrap();
        assert!(context.verify(&signature, MSG1, &public_key));
    }

    #[test]
    fn verify_rejects_wrong_public_key() {
        let context = Secp256k1Context::new();
        let key = PrivateKey::from_hex(KEY1_PRIV_HEX).unwrap();
        let other = PublicKey::from_hex(KEY2_PUB_HEX).unwrap();

        let signature = context.sign(MSG1, &key).unwrap();
        assert!(!context.verify(&signature, MSG1, &other));
    }

    #[test]
    fn verify_rejects_tampered_message() {
        let context = Secp256k1Context::new();
        let key = PrivateKey::from_hex(KEY1_PRIV_HEX).unwrap();
        let public_key = PublicKey::from_hex(KEY1_PUB_HEX).unwrap();

        let signature = context.sign(MSG1, &key).unwrap();
        assert!(!context.verify(&signature, b"tampered", &public_key));
    }

    #[test]
    fn verify_is_false_for_malformed_inputs() {
        let context = Secp256k1Context::new();
        let public_key = PublicKey::from_hex(KEY1_PUB_HEX).unwrap();

        // Malformed hex, wrong-length signature, garbage public key — all
        // verify as false, none panic or error.
        assert!(!context.verify("zz-not-hex", MSG1, &public_key));
        assert!(!context.verify("deadbeef", MSG1, &public_key));
        assert!(!context.verify(
            &"00".repeat(64),
            MSG1,
            &PublicKey::new(vec![0u8; 33])
        ));
    }

    #[test]
    fn sign_rejects_invalid_private_key() {
        let context = Secp256k1Context::new();
        // All zeros is not a valid scalar.
        let zero = PrivateKey::new(vec![0u8; 32]);
        assert_eq!(context.sign(MSG1, &zero), Err(SigningError::InvalidKey));

        let short = PrivateKey::new(vec![1u8; 5]);
        assert_eq!(
            context.get_public_key(&short),
            Err(SigningError::InvalidKey)
        );
    }

    #[test]
    fn random_keys_are_valid_and_distinct() {
        let context = Secp256k1Context::new();
        let a = context.new_random_private_key();
        let b = context.new_random_private_key();

        assert_eq!(a.as_bytes().len(), 32);
        assert_ne!(a, b);
        assert!(SecretKey::from_slice(a.as_bytes()).is_ok());
        assert!(SecretKey::from_slice(b.as_bytes()).is_ok());
    }

    #[test]
    fn random_key_sign_verify_round_trip() {
        let context = Secp256k1Context::new();
        let key = context.new_random_private_key();
        let public_key = context.get_public_key(&key).unwrap();

        let signature = context.sign(b"round trip", &key).unwrap();
        assert_eq!(signature.len(), 128);
        assert!(context.verify(&signature, b"round trip", &public_key));
    }

    #[test]
    fn signature_is_lowercase_hex() {
        let context = Secp256k1Context::new();
        let key = PrivateKey::from_hex(KEY1_PRIV_HEX).unwrap();
        let signature = context.sign(MSG1, &key).unwrap();
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
