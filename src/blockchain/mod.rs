//! Blockchain identity subsystem.
//!
//! # Data Flow
//! ```text
//! ResolvedConfig.networks[name].accounts
//!     → wallet.rs (derive deployer address, read-only)
//!     → reported by the `check` command
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY arrive through environment inputs
//! - Never log private keys or sensitive data
//! - No signing, no RPC: chain ids here are constants

pub mod types;
pub mod wallet;

pub use types::{BlockchainError, ChainId};
pub use wallet::{signer_address, Deployer};
