//! Settings read from a TOML file.
//!
//! ```toml
//! log_level = "info"
//!
//! [rules]
//! castle_through_check = false
//! stalemate_is_checkmate = false
//!
//! [display]
//! show_board = true
//! ```
//!
//! Every key is optional.

use std::path::Path;

use anyhow::Context;
use chess_rules::RuleSet;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub rules: RuleSet,
    pub display: DisplayConfig,
    /// Filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            rules: RuleSet::standard(),
            display: DisplayConfig::default(),
            log_level: "warn".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Print the board after every move.
    pub show_board: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { show_board: true }
    }
}

impl CliConfig {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid config")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }
}
