//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window chrome applied at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Minimum client width in logical pixels.
    pub min_width: u32,
    /// Minimum client height in logical pixels.
    pub min_height: u32,
    /// Ask the OS for a dark titlebar where supported.
    pub dark_titlebar: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "OKX Multichart".into(),
            min_width: 800,
            min_height: 600,
            dark_titlebar: true,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "OKX Multichart");
        assert_eq!(config.min_width, 800);
        assert_eq!(config.min_height, 600);
        assert!(config.dark_titlebar);
    }

    #[test]
    fn window_config_partial_toml() {
        let config: WindowConfig = toml::from_str(
            r#"
title = "Charts"
dark_titlebar = false
"#,
        )
        .unwrap();
        assert_eq!(config.title, "Charts");
        assert!(!config.dark_titlebar);
        // Defaults preserved
        assert_eq!(config.min_width, 800);
        assert_eq!(config.min_height, 600);
    }
}
