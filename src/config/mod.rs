//! Configuration layer for myip.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Default values ([`defaults`])
//!
//! # Category Flags
//!
//! `--all` turns on every category. Giving no category flag at all behaves
//! exactly like `--all`. Otherwise only the named categories run.
//!
//! # Not Configurable
//!
//! The lookup services and interface name prefixes are built in. There is no
//! configuration file and nothing is persisted between runs.

mod cli;
pub mod defaults;
mod error;
mod validated;


pub use cli::Cli;
pub use error::{ConfigError, field};
pub use validated::ValidatedConfig;
