//! App config schema.

mod logging;
mod panes;
mod window;

pub use logging::LoggingConfig;
pub use panes::{PaneConfig, DEFAULT_PANE_COUNT, DEFAULT_PANE_URL};
pub use window::WindowConfig;

use serde::{Deserialize, Serialize};

/// Root of `<exe>.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    /// One entry per pane, top to bottom.
    pub panes: Vec<PaneConfig>,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            panes: panes::default_panes(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    /// Default address of the pane at `index`, if it exists.
    pub fn default_url(&self, index: usize) -> Option<&str> {
        self.panes.get(index).map(|p| p.default_url.as_str())
    }
}
