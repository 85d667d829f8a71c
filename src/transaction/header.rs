//! The transaction header and its canonical serialization.
//!
//! The header is the signed metadata envelope: it binds the payload (by
//! digest) to the family identity, the declared state addresses, the signer
//! and batcher keys, and any dependency transactions. The signature over the
//! serialized header *is* the transaction's identity, so the byte layout
//! here is a wire contract — field order and encoding are fixed forever,
//! never left to incidental struct-field iteration order.
//!
//! # Canonical Byte Format
//!
//! Fields are emitted in exactly this order, strings as
//! `u32-LE length || UTF-8 bytes` and lists as `u32-LE count || elements`:
//!
//! ```text
//! family_name        string
//! family_version     string
//! inputs             list of strings
//! outputs            list of strings
//! signer_public_key  string (hex)
//! batcher_public_key string (hex)
//! dependencies       list of strings (header signatures, hex)
//! payload_sha512     string (hex)
//! ```
//!
//! Length prefixes make the encoding injective: no two distinct headers
//! share a serialization, so a signature over the bytes commits to every
//! field unambiguously.

use serde::{Deserialize, Serialize};

/// The metadata envelope signed to produce a transaction's identity.
///
/// Ephemeral by design: the builder constructs one per transaction,
/// serializes it, signs the bytes, and discards the struct. Only the bytes
/// and the signature travel onward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionHeader {
    /// Transaction family name (`"sabre"` for this SDK).
    pub family_name: String,
    /// Transaction family version (`"0.5"` currently).
    pub family_version: String,
    /// Ordered state addresses the transaction may read.
    pub inputs: Vec<String>,
    /// Ordered state addresses the transaction may write.
    pub outputs: Vec<String>,
    /// Hex-encoded public key of the transaction signer.
    pub signer_public_key: String,
    /// Hex-encoded public key of the party that will batch this
    /// transaction. Defaults to the signer when no separate batcher exists.
    pub batcher_public_key: String,
    /// Header signatures of prior transactions this one depends on.
    pub dependencies: Vec<String>,
    /// Lowercase hex SHA-512 digest of the serialized payload.
    pub payload_sha512: String,
}

fn write_str(buf: &mut Vec<u8>, value: &str) {
    buf.extend_from_slice(&(value.len() as u32).to_le_bytes());
    buf.extend_from_slice(value.as_bytes());
}

fn write_list(buf: &mut Vec<u8>, values: &[String]) {
    buf.extend_from_slice(&(values.len() as u32).to_le_bytes());
    for value in values {
        write_str(buf, value);
    }
}

impl TransactionHeader {
    /// Serializes the header into its canonical byte representation.
    ///
    /// Deterministic: equal headers produce equal bytes, and these are the
    /// exact bytes the transaction signature covers.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512);
        write_str(&mut buf, &self.family_name);
        write_str(&mut buf, &self.family_version);
        write_list(&mut buf, &self.inputs);
        write_list(&mut buf, &self.outputs);
        write_str(&mut buf, &self.signer_public_key);
        write_str(&mut buf, &self.batcher_public_key);
        write_list(&mut buf, &self.dependencies);
        write_str(&mut buf, &self.payload_sha512);
        buf
    }
}
