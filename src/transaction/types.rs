//! The Sabre action vocabulary.
//!
//! A [`SabreAction`] names the operation a payload performs and, crucially,
//! determines which state addresses the transaction must declare as inputs
//! and outputs. The payload bytes themselves stay opaque to this SDK — the
//! external payload schema owns their encoding — but the *addressing*
//! consequences of each action are fixed by the family's rules and computed
//! here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::addressing::{
    contract_address, contract_registry_address, namespace_registry_address, AddressError,
};
use crate::config::ADDRESS_PREFIX_LENGTH;

/// The operation a Sabre payload performs.
///
/// Nine actions exist: three on namespace registries, three on contract
/// registries, two on contracts, and execution. For everything except
/// [`ExecuteContract`](Self::ExecuteContract) the touched addresses follow
/// mechanically from the embedded names. Execution additionally carries the
/// caller-declared state addresses the contract will read and write, since
/// only the caller knows those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SabreAction {
    /// Register a new namespace, creating its registry entry.
    CreateNamespaceRegistry { namespace: String },
    /// Replace the owner list of an existing namespace registry.
    UpdateNamespaceRegistryOwners { namespace: String },
    /// Remove a namespace registry.
    DeleteNamespaceRegistry { namespace: String },

    /// Register a new contract name, creating its registry entry.
    CreateContractRegistry { name: String },
    /// Replace the owner list of an existing contract registry.
    UpdateContractRegistryOwners { name: String },
    /// Remove a contract registry.
    DeleteContractRegistry { name: String },

    /// Upload a new version of a contract.
    UploadContract { name: String, version: String },
    /// Remove one version of a contract.
    DeleteContract { name: String, version: String },

    /// Invoke a contract. `inputs`/`outputs` are the state addresses the
    /// contract itself will read and write, as declared by the caller.
    ExecuteContract {
        name: String,
        version: String,
        inputs: Vec<String>,
        outputs: Vec<String>,
    },
}

impl SabreAction {
    /// State addresses this action reads.
    pub fn input_addresses(&self) -> Result<Vec<String>, AddressError> {
        match self {
            Self::CreateNamespaceRegistry { namespace }
            | Self::UpdateNamespaceRegistryOwners { namespace }
            | Self::DeleteNamespaceRegistry { namespace } => {
                Ok(vec![namespace_registry_address(namespace)?])
            }
            Self::CreateContractRegistry { name }
            | Self::UpdateContractRegistryOwners { name }
            | Self::DeleteContractRegistry { name } => {
                Ok(vec![contract_registry_address(name)?])
            }
            Self::UploadContract { name, version } | Self::DeleteContract { name, version } => {
                Ok(vec![
                    contract_registry_address(name)?,
                    contract_address(name, version)?,
                ])
            }
            Self::ExecuteContract {
                name,
                version,
                inputs,
                ..
            } => Self::execute_addresses(name, version, inputs),
        }
    }

    /// State addresses this action writes.
    pub fn output_addresses(&self) -> Result<Vec<String>, AddressError> {
        match self {
            Self::ExecuteContract {
                name,
                version,
                outputs,
                ..
            } => Self::execute_addresses(name, version, outputs),
            // Every non-execute action writes exactly the addresses it reads.
            _ => self.input_addresses(),
        }
    }

    /// Addresses for contract execution: the contract registry entry, the
    /// contract itself, and then each declared state address preceded by
    /// the namespace registry entry for its 6-character prefix — validators
    /// check namespace permissions there before letting the contract touch
    /// the address.
    fn execute_addresses(
        name: &str,
        version: &str,
        declared: &[String],
    ) -> Result<Vec<String>, AddressError> {
        let mut addresses = vec![
            contract_registry_address(name)?,
            contract_address(name, version)?,
        ];
        for address in declared {
            let prefix: String = address.chars().take(ADDRESS_PREFIX_LENGTH).collect();
            addresses.push(namespace_registry_address(&prefix)?);
            addresses.push(address.clone());
        }
        Ok(addresses)
    }
}

impl fmt::Display for SabreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CreateNamespaceRegistry { .. } => "CreateNamespaceRegistry",
            Self::UpdateNamespaceRegistryOwners { .. } => "UpdateNamespaceRegistryOwners",
            Self::DeleteNamespaceRegistry { .. } => "DeleteNamespaceRegistry",
            Self::CreateContractRegistry { .. } => "CreateContractRegistry",
            Self::UpdateContractRegistryOwners { .. } => "UpdateContractRegistryOwners",
            Self::DeleteContractRegistry { .. } => "DeleteContractRegistry",
            Self::UploadContract { .. } => "UploadContract",
            Self::DeleteContract { .. } => "DeleteContract",
            Self::ExecuteContract { .. } => "ExecuteContract",
        };
        write!(f, "{}", name)
    }
}
