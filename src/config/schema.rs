//! Configuration schema definitions.
//!
//! This module defines the resolved configuration handed to the compiler and
//! deployment tooling. All types derive Serde traits so the record can be
//! exported; field names follow the camelCase convention of the tooling.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::blockchain::types::ChainId;
use crate::config::loader::ConfigError;

/// Solidity compiler release the contracts are built with.
pub const SOLC_VERSION: &str = "0.8.20";

/// Optimizer iteration count (tuned for expected call frequency).
pub const OPTIMIZER_RUNS: u32 = 200;

/// Name of the always-present in-process network.
pub const LOCAL_NETWORK: &str = "local";

/// Placeholder written in place of secrets by [`ResolvedConfig::redacted`].
pub const REDACTED: &str = "<redacted>";

/// Compiler selection and optimizer settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerSettings {
    /// Compiler version (MAJOR.MINOR.PATCH).
    pub version: String,

    /// Run the bytecode optimizer.
    pub optimizer_enabled: bool,

    /// Optimizer runs; must be greater than zero.
    pub optimizer_runs: u32,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            version: SOLC_VERSION.to_string(),
            optimizer_enabled: true,
            optimizer_runs: OPTIMIZER_RUNS,
        }
    }
}

/// A named endpoint the deployment tool can target.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkEntry {
    /// Network identifier (e.g., "sepolia").
    pub name: String,

    /// JSON-RPC endpoint. `None` for the in-process network.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Signing keys. Empty unless a credential was present at assembly.
    #[serde(default)]
    pub accounts: Vec<String>,

    /// Fixed chain identifier for this network.
    pub chain_id: ChainId,
}

impl NetworkEntry {
    /// The in-process development network. No endpoint, no credentials.
    pub fn local() -> Self {
        Self {
            name: LOCAL_NETWORK.to_string(),
            url: None,
            accounts: Vec::new(),
            chain_id: ChainId::LOCAL,
        }
    }

    /// Whether transactions on this network can be signed.
    pub fn can_sign(&self) -> bool {
        !self.accounts.is_empty()
    }

    /// True for the in-process network.
    pub fn is_local(&self) -> bool {
        self.url.is_none()
    }
}

// Accounts hold private keys; only their count is printed.
impl fmt::Debug for NetworkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkEntry")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("accounts", &format_args!("[{} redacted]", self.accounts.len()))
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

/// The configuration produced for one process invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    /// Compiler settings (constant).
    pub compiler: CompilerSettings,

    /// Usable networks in declaration order. Always contains [`LOCAL_NETWORK`].
    pub networks: IndexMap<String, NetworkEntry>,

    /// Verification-service credential. Empty string when not configured.
    pub etherscan_api_key: String,
}

impl ResolvedConfig {
    /// Look up a deployment target by name.
    pub fn network(&self, name: &str) -> Result<&NetworkEntry, ConfigError> {
        self.networks
            .get(name)
            .ok_or_else(|| ConfigError::UnknownNetwork {
                name: name.to_string(),
                available: self.network_names().map(str::to_string).collect(),
            })
    }

    /// Configured network names in declaration order.
    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    /// Networks that carry a signing credential.
    pub fn signing_networks(&self) -> impl Iterator<Item = &NetworkEntry> {
        self.networks.values().filter(|n| n.can_sign())
    }

    /// Copy of this config with every secret masked.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        for entry in copy.networks.values_mut() {
            for account in entry.accounts.iter_mut() {
                *account = REDACTED.to_string();
            }
        }
        if !copy.etherscan_api_key.is_empty() {
            copy.etherscan_api_key = REDACTED.to_string();
        }
        copy
    }
}
