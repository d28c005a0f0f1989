//! Pane list configuration.

use serde::{Deserialize, Serialize};

/// Address every pane opens when nothing was persisted for it.
pub const DEFAULT_PANE_URL: &str = "https://web3.okx.com";

/// Number of panes when the config does not list any.
pub const DEFAULT_PANE_COUNT: usize = 3;

/// A single browser pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaneConfig {
    /// Address loaded when the pane has no persisted URL.
    pub default_url: String,
}

impl Default for PaneConfig {
    fn default() -> Self {
        Self {
            default_url: DEFAULT_PANE_URL.into(),
        }
    }
}

pub(super) fn default_panes() -> Vec<PaneConfig> {
    vec![PaneConfig::default(); DEFAULT_PANE_COUNT]
}
