//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (+ optional .env file)
//!     → loader.rs (parse env file, layer under process env)
//!     → env.rs (EnvSource: presence = set and non-empty)
//!     → assembler.rs (walk remote network table, keep active entries)
//!     → validation.rs (static checks on the result)
//!     → ResolvedConfig (immutable, one per invocation)
//!     → render.rs (JSON / TOML / Hardhat export)
//! ```
//!
//! # Design Decisions
//! - Assembly is a pure function of its `EnvSource`; missing inputs omit networks, never fail
//! - Compiler settings are constants, independent of the environment
//! - Validation separates authoring defects from normal absence of secrets

pub mod assembler;
pub mod env;
pub mod loader;
pub mod render;
pub mod schema;
pub mod validation;

pub use assembler::{assemble, ConfigAssembler, Endpoint, RemoteNetwork, REMOTE_NETWORKS};
pub use env::{EnvSource, Layered, MapEnv, ProcessEnv};
pub use loader::ConfigError;
pub use render::OutputFormat;
pub use schema::{CompilerSettings, NetworkEntry, ResolvedConfig};
pub use validation::{validate_config, ValidationError};
