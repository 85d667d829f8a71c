//! # Transaction Module
//!
//! Construction and signing of Sabre transactions: the action vocabulary,
//! the canonical header format, and the builder that assembles and signs
//! the final envelope.
//!
//! ## Architecture
//!
//! ```text
//! types.rs   — SabreAction: the nine Sabre operations and the state
//!              addresses each one reads and writes
//! header.rs  — TransactionHeader and its canonical byte serialization
//! builder.rs — TransactionBuilder producing signed, immutable Transactions
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Describe** — Pick a [`SabreAction`] naming what the payload does.
//! 2. **Build** — [`TransactionBuilder`] derives the input/output addresses,
//!    hashes the payload, assembles and serializes the header.
//! 3. **Sign** — The header bytes are signed through a
//!    [`Signer`](crate::signing::Signer); the signature becomes the
//!    transaction's identity.
//! 4. **Hand off** — The finished [`Transaction`] goes to an external
//!    batching/submission collaborator. This crate never touches the
//!    network.

pub mod builder;
pub mod header;
pub mod types;

pub use builder::{BuildError, Transaction, TransactionBuilder};
pub use header::TransactionHeader;
pub use types::SabreAction;
