//! Contract deployment configuration.
//!
//! Resolves compiler settings and the set of usable deployment networks from
//! environment secrets.

pub mod blockchain;
pub mod config;
pub mod observability;

pub use config::assembler::assemble;
pub use config::schema::ResolvedConfig;
