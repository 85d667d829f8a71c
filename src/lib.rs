//! # Sabre SDK — Transaction Construction & Signing
//!
//! Client-side building blocks for the Sabre smart-contract transaction
//! family. This crate does exactly two things, and does them byte-exactly:
//!
//! 1. **Address derivation** — deterministic 70-character hex state addresses
//!    for namespaces, contract registries, and versioned contracts. Validator
//!    nodes recompute these independently; a single wrong byte means your
//!    transaction reads the wrong state and dies in validation.
//! 2. **Transaction signing** — assembling a transaction header, serializing
//!    it canonically, and signing it with secp256k1 so the resulting envelope
//!    survives independent re-verification on the other side of the network.
//!
//! Everything else — payload schemas, batching, submission, the validator
//! runtime itself — lives outside this crate. We hand over a signed
//! [`Transaction`](transaction::Transaction) and our job is done.
//!
//! ## Architecture
//!
//! - **addressing** — Pure functions from names/namespaces to state addresses.
//! - **signing** — Key types, the pluggable [`Context`](signing::Context)
//!   capability, and the [`Signer`](signing::Signer) that binds a context to
//!   one private key.
//! - **transaction** — The Sabre action vocabulary, the canonical header
//!   format, and the builder that ties it all together.
//! - **config** — Family identity constants and cryptographic widths.
//!
//! ## Design Philosophy
//!
//! 1. Deterministic output or bust — addresses and signatures are pure
//!    functions of their inputs.
//! 2. Immutable artifacts — keys and signed transactions cannot be tampered
//!    with after construction.
//! 3. No half-built transactions — the builder returns a complete signed
//!    envelope or a specific error, never something in between.
//!
//! ## Example
//!
//! ```
//! use sabre_sdk::signing::{Secp256k1Context, Context, Signer};
//! use sabre_sdk::transaction::{SabreAction, TransactionBuilder};
//!
//! let context = Secp256k1Context::new();
//! let key = context.new_random_private_key();
//! let signer = Signer::new(key);
//!
//! let txn = TransactionBuilder::new()
//!     .action(SabreAction::CreateContractRegistry {
//!         name: "intkey_multiply".into(),
//!     })
//!     .payload(b"opaque serialized payload".to_vec())
//!     .signer(&signer)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(txn.header_signature().len(), 128);
//! ```

pub mod addressing;
pub mod config;
pub mod signing;
pub mod transaction;

pub use addressing::{
    contract_address, contract_registry_address, namespace_registry_address, AddressError,
};
pub use signing::{Context, PrivateKey, PublicKey, Secp256k1Context, Signer, SigningError};
pub use transaction::{BuildError, SabreAction, Transaction, TransactionBuilder, TransactionHeader};
