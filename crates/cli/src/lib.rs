//! `stockroom-cli`
//!
//! **Responsibility:** interactive text menu over an in-memory inventory.
//!
//! The CLI is a thin shell: it parses and re-prompts for input, calls into
//! `stockroom-inventory`, and renders the results. It holds no inventory rules of
//! its own.

pub mod actions;
pub mod config;
pub mod input;
pub mod menu;
pub mod report;

pub use config::{CliConfig, ConfigError};
pub use input::{Console, Prompt};
pub use menu::{MenuChoice, run};
