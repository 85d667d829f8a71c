//! Transaction construction via the builder pattern.
//!
//! The [`TransactionBuilder`] is the orchestration point of this SDK: it
//! derives the state addresses an action touches, hashes the payload,
//! assembles the canonical header, and signs the header bytes through a
//! [`Signer`]. The result is an immutable, complete [`Transaction`] — or a
//! specific error. Nothing half-built ever escapes.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use tracing::debug;

use super::header::TransactionHeader;
use super::types::SabreAction;
use crate::addressing::AddressError;
use crate::config::{FAMILY_NAME, FAMILY_VERSION};
use crate::signing::{Signer, SigningError};

/// Errors from transaction assembly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A field the header cannot be assembled without was never supplied.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// An input/output address could not be derived from the action.
    #[error(transparent)]
    Address(#[from] AddressError),

    /// Signing the header failed (typically an invalid private key).
    #[error(transparent)]
    Signing(#[from] SigningError),
}

/// A signed Sabre transaction, ready for external batching and submission.
///
/// Immutable after construction: the fields are private and only readable.
/// Mutating signed material would invalidate the signature, so the type
/// simply doesn't allow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    header: Vec<u8>,
    header_signature: String,
    payload: Vec<u8>,
}

impl Transaction {
    /// The canonical serialized header bytes the signature covers.
    pub fn header(&self) -> &[u8] {
        &self.header
    }

    /// Hex-encoded signature over the header bytes. This doubles as the
    /// transaction's identity and as the handle other transactions use to
    /// declare a dependency on this one.
    pub fn header_signature(&self) -> &str {
        &self.header_signature
    }

    /// The opaque serialized payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

/// Fluent builder for signed Sabre transactions.
///
/// The family identity defaults to the process-wide Sabre constants and the
/// batcher key defaults to the signer's own key, so the minimal complete
/// invocation is action + payload + signer:
///
/// ```
/// use sabre_sdk::signing::{Context, Secp256k1Context, Signer};
/// use sabre_sdk::transaction::{SabreAction, TransactionBuilder};
///
/// let context = Secp256k1Context::new();
/// let signer = Signer::new(context.new_random_private_key());
///
/// let txn = TransactionBuilder::new()
///     .action(SabreAction::UploadContract {
///         name: "intkey_multiply".into(),
///         version: "1.0".into(),
///     })
///     .payload(b"serialized upload payload".to_vec())
///     .signer(&signer)
///     .build()
///     .unwrap();
/// ```
pub struct TransactionBuilder<'a> {
    family_name: String,
    family_version: String,
    action: Option<SabreAction>,
    payload: Option<Vec<u8>>,
    signer: Option<&'a Signer>,
    batcher_public_key: Option<String>,
    dependencies: Vec<String>,
}

impl<'a> TransactionBuilder<'a> {
    /// Creates a builder preloaded with the Sabre family identity.
    pub fn new() -> Self {
        Self {
            family_name: FAMILY_NAME.to_string(),
            family_version: FAMILY_VERSION.to_string(),
            action: None,
            payload: None,
            signer: None,
            batcher_public_key: None,
            dependencies: Vec::new(),
        }
    }

    /// Overrides the family name. Only needed when targeting a validator
    /// configured with a non-standard family registration.
    pub fn family_name(mut self, name: &str) -> Self {
        self.family_name = name.to_string();
        self
    }

    /// Overrides the family version.
    pub fn family_version(mut self, version: &str) -> Self {
        self.family_version = version.to_string();
        self
    }

    /// Sets the action describing what the payload does. Required; this is
    /// where the input/output addresses come from.
    pub fn action(mut self, action: SabreAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Sets the serialized payload bytes. Required. The builder never looks
    /// inside them — only their SHA-512 digest enters the header.
    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Sets the signer whose key signs the header. Required.
    pub fn signer(mut self, signer: &'a Signer) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Sets a batcher public key (hex) distinct from the signer's. When
    /// omitted, the signer batches its own transaction.
    pub fn batcher_public_key(mut self, key_hex: &str) -> Self {
        self.batcher_public_key = Some(key_hex.to_string());
        self
    }

    /// Declares prior transactions (by header signature) this one depends
    /// on; the validator will not commit it before them.
    pub fn dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// Assembles, serializes, and signs the transaction.
    ///
    /// 1. Derive input/output addresses from the action.
    /// 2. SHA-512 the payload.
    /// 3. Assemble the header (batcher key falls back to the signer's).
    /// 4. Serialize canonically and sign the bytes.
    ///
    /// Fails with [`BuildError::MissingField`] when the action, payload, or
    /// signer was never set or the family identity was blanked out;
    /// address-derivation and signing failures propagate as their own
    /// variants.
    pub fn build(self) -> Result<Transaction, BuildError> {
        let action = self.action.ok_or(BuildError::MissingField("action"))?;
        let payload = self.payload.ok_or(BuildError::MissingField("payload"))?;
        let signer = self.signer.ok_or(BuildError::MissingField("signer"))?;
        if self.family_name.is_empty() {
            return Err(BuildError::MissingField("family_name"));
        }
        if self.family_version.is_empty() {
            return Err(BuildError::MissingField("family_version"));
        }

        let inputs = action.input_addresses()?;
        let outputs = action.output_addresses()?;
        let payload_sha512 = hex::encode(Sha512::digest(&payload));

        let signer_public_key = signer.public_key()?.as_hex();
        let batcher_public_key = self
            .batcher_public_key
            .unwrap_or_else(|| signer_public_key.clone());

        let header = TransactionHeader {
            family_name: self.family_name,
            family_version: self.family_version,
            inputs,
            outputs,
            signer_public_key,
            batcher_public_key,
            dependencies: self.dependencies,
            payload_sha512,
        };

        let header_bytes = header.to_bytes();
        let header_signature = signer.sign(&header_bytes)?;

        debug!(
            action = %action,
            family = %header.family_name,
            inputs = header.inputs.len(),
            outputs = header.outputs.len(),
            signature = %header_signature,
            "built sabre transaction"
        );

        Ok(Transaction {
            header: header_bytes,
            header_signature,
            payload,
        })
    }
}

impl<'a> Default for TransactionBuilder<'a> {
    fn default() -> Self {
        Self::new()
    }
}
