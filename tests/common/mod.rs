//! Shared helpers for integration tests.

use deploy_config::config::env::{ETHERSCAN_API_KEY, INFURA_PROJECT_ID, PRIVATE_KEY};
use deploy_config::config::MapEnv;

/// Anvil's first well-known development key.
#[allow(dead_code)]
pub const TEST_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Build an environment from optional values for the recognized variables.
pub fn env_with(
    private_key: Option<&str>,
    infura_project_id: Option<&str>,
    etherscan_api_key: Option<&str>,
) -> MapEnv {
    let mut env = MapEnv::new();
    let vars = [
        (PRIVATE_KEY, private_key),
        (INFURA_PROJECT_ID, infura_project_id),
        (ETHERSCAN_API_KEY, etherscan_api_key),
    ];
    for (name, value) in vars {
        if let Some(value) = value {
            env.set(name, value);
        }
    }
    env
}
