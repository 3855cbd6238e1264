//! Export of the resolved configuration.

use clap::ValueEnum;
use serde_json::{json, Map, Value};

use crate::config::loader::ConfigError;
use crate::config::schema::ResolvedConfig;

/// Key the deployment tool reserves for its in-process network.
pub const HARDHAT_LOCAL_NETWORK: &str = "hardhat";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The resolved record as JSON.
    #[default]
    Json,
    /// The resolved record as TOML.
    Toml,
    /// Hardhat user-config JSON (`solidity`, `networks`, `etherscan`).
    Hardhat,
}

/// Map the config onto the Hardhat user-config layout.
pub fn to_hardhat_value(config: &ResolvedConfig) -> Value {
    let mut networks = Map::new();
    for entry in config.networks.values() {
        let mut network = Map::new();
        if let Some(url) = &entry.url {
            network.insert("url".into(), json!(url));
        }
        if entry.can_sign() {
            network.insert("accounts".into(), json!(entry.accounts));
        }
        network.insert("chainId".into(), json!(entry.chain_id));

        let key = if entry.is_local() {
            HARDHAT_LOCAL_NETWORK
        } else {
            entry.name.as_str()
        };
        networks.insert(key.to_string(), Value::Object(network));
    }

    json!({
        "solidity": {
            "version": config.compiler.version,
            "settings": {
                "optimizer": {
                    "enabled": config.compiler.optimizer_enabled,
                    "runs": config.compiler.optimizer_runs,
                },
            },
        },
        "networks": networks,
        "etherscan": {
            "apiKey": config.etherscan_api_key,
        },
    })
}

/// Render `config` in the requested format.
pub fn render(config: &ResolvedConfig, format: OutputFormat) -> Result<String, ConfigError> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Toml => toml::to_string_pretty(config)?,
        OutputFormat::Hardhat => serde_json::to_string_pretty(&to_hardhat_value(config))?,
    };
    Ok(rendered)
}
