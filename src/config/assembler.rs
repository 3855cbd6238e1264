//! Conditional network assembly.
//!
//! The resolved network map is built by walking [`REMOTE_NETWORKS`] in order
//! and keeping each entry whose required variables are all present. A network
//! whose inputs are missing is left out entirely.

use indexmap::IndexMap;

use crate::blockchain::types::ChainId;
use crate::config::env::{self, present, EnvSource};
use crate::config::loader::ConfigError;
use crate::config::schema::{CompilerSettings, NetworkEntry, ResolvedConfig, LOCAL_NETWORK};
use crate::config::validation::validate_config;

/// Where a remote network's JSON-RPC endpoint comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// A public endpoint needing no provider credential.
    Public(&'static str),
    /// An Infura-hosted endpoint; the project id is appended to the URL.
    Infura { subdomain: &'static str },
}

impl Endpoint {
    /// Variables the endpoint itself needs.
    pub fn requirements(&self) -> &'static [&'static str] {
        match self {
            Endpoint::Public(_) => &[],
            Endpoint::Infura { .. } => &[env::INFURA_PROJECT_ID],
        }
    }

    fn resolve(&self, source: &impl EnvSource) -> Option<String> {
        match self {
            Endpoint::Public(url) => Some((*url).to_string()),
            Endpoint::Infura { subdomain } => present(source, env::INFURA_PROJECT_ID)
                .map(|project_id| format!("https://{}.infura.io/v3/{}", subdomain, project_id)),
        }
    }
}

/// A remote network that is registered only when its inputs are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteNetwork {
    pub name: &'static str,
    pub chain_id: ChainId,
    pub endpoint: Endpoint,
}

impl RemoteNetwork {
    /// Every variable that must be non-empty for this network to activate.
    ///
    /// Remote networks always need the signing credential.
    pub fn requirements(&self) -> Vec<&'static str> {
        let mut vars = vec![env::PRIVATE_KEY];
        vars.extend_from_slice(self.endpoint.requirements());
        vars
    }

    /// Activation predicate: conjunction of presence over [`Self::requirements`].
    pub fn is_active(&self, source: &impl EnvSource) -> bool {
        self.requirements()
            .iter()
            .all(|name| env::is_present(source, name))
    }

    /// Names of required variables that are missing or empty.
    pub fn missing(&self, source: &impl EnvSource) -> Vec<&'static str> {
        self.requirements()
            .into_iter()
            .filter(|name| !env::is_present(source, name))
            .collect()
    }

    /// Build the entry, or `None` when the predicate does not hold.
    pub fn activate(&self, source: &impl EnvSource) -> Option<NetworkEntry> {
        let private_key = present(source, env::PRIVATE_KEY)?;
        let url = self.endpoint.resolve(source)?;

        Some(NetworkEntry {
            name: self.name.to_string(),
            url: Some(url),
            accounts: vec![private_key],
            chain_id: self.chain_id,
        })
    }
}

/// Remote networks in declaration order.
pub const REMOTE_NETWORKS: &[RemoteNetwork] = &[
    RemoteNetwork {
        name: "sepolia",
        chain_id: ChainId::SEPOLIA,
        endpoint: Endpoint::Public("https://ethereum-sepolia.publicnode.com"),
    },
    RemoteNetwork {
        name: "goerli",
        chain_id: ChainId::GOERLI,
        endpoint: Endpoint::Infura { subdomain: "goerli" },
    },
];

/// Derives a [`ResolvedConfig`] from environment inputs.
#[derive(Debug, Clone, Copy)]
pub struct ConfigAssembler {
    remotes: &'static [RemoteNetwork],
}

impl Default for ConfigAssembler {
    fn default() -> Self {
        Self {
            remotes: REMOTE_NETWORKS,
        }
    }
}

impl ConfigAssembler {
    /// Assembler over a custom remote network table.
    pub fn with_networks(remotes: &'static [RemoteNetwork]) -> Self {
        Self { remotes }
    }

    /// Build the configuration. Reads `source` and nothing else.
    pub fn assemble(&self, source: &impl EnvSource) -> ResolvedConfig {
        let mut networks = IndexMap::with_capacity(self.remotes.len() + 1);
        networks.insert(LOCAL_NETWORK.to_string(), NetworkEntry::local());

        for remote in self.remotes {
            match remote.activate(source) {
                Some(entry) => {
                    tracing::debug!(network = remote.name, chain_id = %remote.chain_id, "Network enabled");
                    networks.insert(entry.name.clone(), entry);
                }
                None => {
                    tracing::debug!(
                        network = remote.name,
                        missing = ?remote.missing(source),
                        "Network omitted"
                    );
                }
            }
        }

        ResolvedConfig {
            compiler: CompilerSettings::default(),
            networks,
            etherscan_api_key: present(source, env::ETHERSCAN_API_KEY).unwrap_or_default(),
        }
    }

    /// [`Self::assemble`], then fail fast if the result breaks a static rule.
    pub fn assemble_checked(&self, source: &impl EnvSource) -> Result<ResolvedConfig, ConfigError> {
        let config = self.assemble(source);
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

/// Assemble with the built-in network table.
pub fn assemble(source: &impl EnvSource) -> ResolvedConfig {
    ConfigAssembler::default().assemble(source)
}

impl ResolvedConfig {
    /// Assemble from `source` and run static validation on the result.
    pub fn checked(source: &impl EnvSource) -> Result<Self, ConfigError> {
        ConfigAssembler::default().assemble_checked(source)
    }
}
