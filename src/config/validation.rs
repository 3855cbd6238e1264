//! Configuration validation.
//!
//! # Responsibilities
//! - Check the authored constants (compiler version, optimizer runs)
//! - Check network entries (local entry shape, URLs, unique chain ids)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ResolvedConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is handed to any downstream tool

use std::collections::HashMap;

use semver::Version;
use thiserror::Error;
use url::Url;

use crate::blockchain::types::ChainId;
use crate::config::schema::{ResolvedConfig, LOCAL_NETWORK};

/// A single broken rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("compiler version '{version}' is invalid: {reason}")]
    InvalidCompilerVersion { version: String, reason: String },

    #[error("optimizer runs must be greater than zero")]
    ZeroOptimizerRuns,

    #[error("local network is missing")]
    MissingLocalNetwork,

    #[error("local network must not have an endpoint or accounts")]
    LocalNetworkNotInProcess,

    #[error("network key '{key}' does not match entry name '{name}'")]
    NameMismatch { key: String, name: String },

    #[error("network '{0}' has no URL")]
    MissingUrl(String),

    #[error("network '{network}' has invalid URL: {reason}")]
    InvalidUrl { network: String, reason: String },

    #[error("network '{network}' uses unsupported scheme '{scheme}'")]
    UnsupportedScheme { network: String, scheme: String },

    #[error("chain id {chain_id} is used by both '{first}' and '{second}'")]
    DuplicateChainId {
        chain_id: ChainId,
        first: String,
        second: String,
    },
}

/// Validate a resolved configuration, collecting every problem.
pub fn validate_config(config: &ResolvedConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = Version::parse(&config.compiler.version) {
        errors.push(ValidationError::InvalidCompilerVersion {
            version: config.compiler.version.clone(),
            reason: e.to_string(),
        });
    }
    if config.compiler.optimizer_runs == 0 {
        errors.push(ValidationError::ZeroOptimizerRuns);
    }

    match config.networks.get(LOCAL_NETWORK) {
        None => errors.push(ValidationError::MissingLocalNetwork),
        Some(local) if local.url.is_some() || local.can_sign() => {
            errors.push(ValidationError::LocalNetworkNotInProcess)
        }
        Some(_) => {}
    }

    let mut chain_owners: HashMap<ChainId, &str> = HashMap::new();
    for (key, entry) in &config.networks {
        if key != &entry.name {
            errors.push(ValidationError::NameMismatch {
                key: key.clone(),
                name: entry.name.clone(),
            });
        }

        if key != LOCAL_NETWORK {
            validate_url(key, entry.url.as_deref(), &mut errors);
        }

        if let Some(first) = chain_owners.insert(entry.chain_id, key.as_str()) {
            errors.push(ValidationError::DuplicateChainId {
                chain_id: entry.chain_id,
                first: first.to_string(),
                second: key.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_url(network: &str, url: Option<&str>, errors: &mut Vec<ValidationError>) {
    let Some(raw) = url else {
        errors.push(ValidationError::MissingUrl(network.to_string()));
        return;
    };

    match Url::parse(raw) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
        Ok(parsed) => errors.push(ValidationError::UnsupportedScheme {
            network: network.to_string(),
            scheme: parsed.scheme().to_string(),
        }),
        Err(e) => errors.push(ValidationError::InvalidUrl {
            network: network.to_string(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::assembler::assemble;
    use crate::config::env::{self, MapEnv};
    use crate::config::schema::NetworkEntry;

    fn full_config() -> ResolvedConfig {
        assemble(
            &MapEnv::new()
                .with(env::PRIVATE_KEY, "0xabc")
                .with(env::INFURA_PROJECT_ID, "proj123"),
        )
    }

    #[test]
    fn test_compiler_version_must_be_semver() {
        for bad in ["latest", "0.8", "v0.8.20", "0.8.20.1", "0..20"] {
            let mut config = full_config();
            config.compiler.version = bad.into();

            let errors = validate_config(&config).unwrap_err();
            assert_eq!(errors.len(), 1, "{}", bad);
            assert!(
                matches!(&errors[0], ValidationError::InvalidCompilerVersion { version, reason }
                    if version == bad && !reason.is_empty()),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn test_compiler_version_accepts_release() {
        let mut config = full_config();
        config.compiler.version = "0.8.24".into();
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_builtin_config_is_valid() {
        assert_eq!(validate_config(&assemble(&MapEnv::new())), Ok(()));
        assert_eq!(validate_config(&full_config()), Ok(()));
    }

    #[test]
    fn test_reports_all_errors() {
        let mut config = full_config();
        config.compiler.version = "latest".into();
        config.compiler.optimizer_runs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::ZeroOptimizerRuns));
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::InvalidCompilerVersion { version, .. } if version == "latest"
        )));
    }

    #[test]
    fn test_missing_local() {
        let mut config = full_config();
        config.networks.shift_remove(LOCAL_NETWORK);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::MissingLocalNetwork]);
    }

    #[test]
    fn test_local_with_accounts_rejected() {
        let mut config = full_config();
        config.networks[LOCAL_NETWORK].accounts.push("0xabc".into());
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::LocalNetworkNotInProcess]);
    }

    #[test]
    fn test_bad_urls() {
        let mut config = full_config();
        config.networks["sepolia"].url = Some("not a url".into());
        config.networks["goerli"].url = Some("ws://goerli.example".into());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(&errors[0], ValidationError::InvalidUrl { network, .. } if network == "sepolia"));
        assert!(matches!(&errors[1], ValidationError::UnsupportedScheme { scheme, .. } if scheme == "ws"));
    }

    #[test]
    fn test_remote_without_url() {
        let mut config = full_config();
        config.networks["sepolia"].url = None;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::MissingUrl("sepolia".into())]);
    }

    #[test]
    fn test_duplicate_chain_id() {
        let mut config = full_config();
        config.networks["goerli"].chain_id = ChainId::SEPOLIA;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateChainId {
                chain_id: ChainId::SEPOLIA,
                first: "sepolia".into(),
                second: "goerli".into(),
            }]
        );
    }

    #[test]
    fn test_name_mismatch() {
        let mut config = full_config();
        config.networks.insert(
            "mainnet".into(),
            NetworkEntry {
                name: "other".into(),
                url: Some("https://example.org".into()),
                accounts: Vec::new(),
                chain_id: ChainId(1),
            },
        );
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::NameMismatch {
                key: "mainnet".into(),
                name: "other".into(),
            }]
        );
    }
}
