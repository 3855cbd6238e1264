//! Environment loading from disk.
//!
//! Secrets usually live in a `.env` file next to the project. The file is
//! parsed into a [`MapEnv`] and stacked under the process environment; the
//! process environment itself is never modified.

use std::path::Path;

use thiserror::Error;

use crate::config::env::{Layered, MapEnv, ProcessEnv};
use crate::config::validation::ValidationError;

/// Default env file, relative to the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Error type for configuration loading and export.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Env file error: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("Network '{name}' is not configured (available: {})", .available.join(", "))]
    UnknownNetwork { name: String, available: Vec<String> },

    #[error("JSON render error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML render error: {0}")]
    Toml(#[from] toml::ser::Error),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a dotenv file into an in-memory environment.
///
/// Later assignments of the same key override earlier ones. Unquoted and
/// double-quoted values expand `$NAME`, so a literal `$` needs single quotes.
pub fn load_env_file(path: &Path) -> Result<MapEnv, ConfigError> {
    let mut env = MapEnv::new();
    for item in dotenvy::from_path_iter(path)? {
        let (name, value) = item?;
        env.set(name, value);
    }

    tracing::debug!(path = %path.display(), vars = env.len(), "Env file loaded");
    Ok(env)
}

/// Like [`load_env_file`], but a missing file yields an empty environment.
pub fn load_optional_env_file(path: &Path) -> Result<MapEnv, ConfigError> {
    match load_env_file(path) {
        Err(ConfigError::EnvFile(e)) if e.not_found() => {
            tracing::debug!(path = %path.display(), "No env file found");
            Ok(MapEnv::new())
        }
        other => other,
    }
}

/// The environment a process invocation assembles from.
///
/// Exported variables take precedence over the env file.
pub fn process_environment(env_file: Option<&Path>) -> Result<Layered<ProcessEnv, MapEnv>, ConfigError> {
    let file_env = match env_file {
        Some(path) => load_optional_env_file(path)?,
        None => MapEnv::new(),
    };
    Ok(Layered::new(ProcessEnv, file_env))
}
