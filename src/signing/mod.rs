//! # Signing
//!
//! Key material, the pluggable signing capability, and the [`Signer`] that
//! higher layers actually use.
//!
//! The design splits into three pieces:
//!
//! - [`PrivateKey`] / [`PublicKey`] — dumb, immutable byte wrappers with hex
//!   round trips. They carry no cryptographic behavior of their own.
//! - [`Context`] — the algorithm capability: sign, verify, derive, generate.
//!   One concrete implementation exists today ([`Secp256k1Context`]); the
//!   trait is the seam where future algorithms plug in without touching the
//!   transaction builder.
//! - [`Signer`] — one context bound to one private key, so callers don't
//!   thread the key through every call site.
//!
//! ## Verification is a boolean
//!
//! [`Context::verify`] returns `bool`, not `Result`. A failed verification is
//! a legitimate, expected outcome callers branch on, not a fault — and that
//! includes malformed signature hex, which verifies as `false` rather than
//! erroring. Every other fallible operation here uses [`SigningError`].
//!
//! Key bytes are never logged by this module, and [`PrivateKey`]'s `Debug`
//! impl refuses to print them.

mod keys;
mod secp256k1;

pub use self::keys::{PrivateKey, PublicKey};
pub use self::secp256k1::Secp256k1Context;

use thiserror::Error;

/// Errors during key decoding and signing operations.
///
/// Intentionally terse — error messages must never leak key material.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SigningError {
    /// Input was not valid lowercase/uppercase hex, or had odd length.
    #[error("invalid hex encoding: {0}")]
    InvalidEncoding(String),

    /// The private key bytes were rejected by the curve (zero, not 32 bytes,
    /// or not below the group order).
    #[error("private key rejected by the curve")]
    InvalidKey,

    /// The message digest was rejected by the signing backend. With a
    /// 32-byte SHA-256 digest this does not happen in practice.
    #[error("message digest rejected by the signing backend")]
    InvalidMessage,
}

/// The pluggable signing capability for one algorithm.
///
/// A context is stateless: one instance may be shared freely across threads
/// and across any number of sign/verify calls. Selecting which context a
/// [`Signer`] uses is a construction-time decision, never a per-call one.
pub trait Context: Send + Sync {
    /// Stable identifier for the algorithm (e.g. `"secp256k1"`). External
    /// collaborators use it to tag which algorithm produced a signature.
    fn algorithm_name(&self) -> &str;

    /// Signs `message` with `private_key`, returning the signature as
    /// lowercase hex. Deterministic: a fixed (message, key) pair always
    /// yields the same signature.
    fn sign(&self, message: &[u8], private_key: &PrivateKey) -> Result<String, SigningError>;

    /// Verifies a hex-encoded signature over `message` against `public_key`.
    ///
    /// Returns `false` on *any* failure — wrong key, tampered message,
    /// malformed hex, garbage bytes. Never panics, never errors.
    fn verify(&self, signature: &str, message: &[u8], public_key: &PublicKey) -> bool;

    /// Derives the public key for `private_key`. Deterministic, no
    /// randomness involved.
    fn get_public_key(&self, private_key: &PrivateKey) -> Result<PublicKey, SigningError>;

    /// Generates a new private key from the OS entropy source, retrying
    /// until the candidate passes the curve's validity predicate. Never
    /// returns an invalid key.
    fn new_random_private_key(&self) -> PrivateKey;
}

/// One signing context bound to one fixed private key.
///
/// The simplified surface the transaction builder consumes: `sign` and
/// `public_key`, with the key threaded internally. Construction with
/// [`Signer::new`] selects secp256k1; [`Signer::with_context`] picks any
/// other [`Context`].
///
/// # Example
///
/// ```
/// use sabre_sdk::signing::{Context, Secp256k1Context, Signer};
///
/// let context = Secp256k1Context::new();
/// let key = context.new_random_private_key();
/// let signer = Signer::new(key);
///
/// let signature = signer.sign(b"payload bytes").unwrap();
/// let public_key = signer.public_key().unwrap();
/// assert!(signer.context().verify(&signature, b"payload bytes", &public_key));
/// ```
pub struct Signer {
    context: Box<dyn Context>,
    key: PrivateKey,
}

impl Signer {
    /// Creates a signer over the default secp256k1 context.
    pub fn new(key: PrivateKey) -> Self {
        Self::with_context(Box::new(Secp256k1Context::new()), key)
    }

    /// Creates a signer over an explicit context. This is where a future
    /// algorithm gets selected; nothing downstream changes.
    pub fn with_context(context: Box<dyn Context>, key: PrivateKey) -> Self {
        Self { context, key }
    }

    /// Signs `message` with the held private key.
    pub fn sign(&self, message: &[u8]) -> Result<String, SigningError> {
        self.context.sign(message, &self.key)
    }

    /// Derives the public key for the held private key.
    pub fn public_key(&self) -> Result<PublicKey, SigningError> {
        self.context.get_public_key(&self.key)
    }

    /// The algorithm identifier of the bound context.
    pub fn algorithm_name(&self) -> &str {
        self.context.algorithm_name()
    }

    /// The underlying context, for verifying signatures against keys other
    /// than this signer's own.
    pub fn context(&self) -> &dyn Context {
        &*self.context
    }
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The held key is deliberately absent.
        write!(f, "Signer(algorithm={})", self.algorithm_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signer_defaults_to_secp256k1() {
        let context = Secp256k1Context::new();
        let signer = Signer::new(context.new_random_private_key());
        assert_eq!(signer.algorithm_name(), "secp256k1");
        assert_eq!(signer.context().algorithm_name(), "secp256k1");
    }

    #[test]
    fn signer_sign_matches_context_sign() {
        let context = Secp256k1Context::new();
        let key = context.new_random_private_key();
        let signer = Signer::new(key.clone());

        let via_signer = signer.sign(b"message").unwrap();
        let via_context = context.sign(b"message", &key).unwrap();
        assert_eq!(via_signer, via_context);
    }

    #[test]
    fn signer_public_key_matches_context_derivation() {
        let context = Secp256k1Context::new();
        let key = context.new_random_private_key();
        let signer = Signer::new(key.clone());

        assert_eq!(
            signer.public_key().unwrap(),
            context.get_public_key(&key).unwrap()
        );
    }

    #[test]
    fn signer_signature_verifies_through_its_own_context() {
        let context = Secp256k1Context::new();
        let signer = Signer::new(context.new_random_private_key());

        let signature = signer.sign(b"round trip").unwrap();
        let public_key = signer.public_key().unwrap();
        assert!(signer.context().verify(&signature, b"round trip", &public_key));
    }

    #[test]
    fn debug_output_carries_no_key_material() {
        let context = Secp256k1Context::new();
        let key = context.new_random_private_key();
        let key_hex = key.as_hex();
        let signer = Signer::new(key);

        let debug = format!("{:?}", signer);
        assert!(!debug.contains(&key_hex));
    }
}
