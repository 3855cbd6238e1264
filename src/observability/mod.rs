//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config / blockchain modules:
//!     → tracing events (network enabled/omitted, env file loaded)
//!     → logging.rs (subscriber on stderr, filtered by RUST_LOG)
//! ```
//!
//! # Design Decisions
//! - stdout is reserved for rendered config; logs go to stderr
//! - Secret values are never recorded as event fields

pub mod logging;

pub use logging::init_logging;
