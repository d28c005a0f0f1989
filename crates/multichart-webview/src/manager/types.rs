/// Configuration for creating a new WebView instance.
///
/// Panes are created blank and navigated once their engine reports ready,
/// so there is no initial URL here.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Whether to enable dev tools (on in debug builds).
    pub devtools: bool,
    /// Custom user agent string. `None` keeps the engine default.
    pub user_agent: Option<String>,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            user_agent: None,
            clipboard: true,
            autoplay: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_engine_user_agent() {
        let config = WebViewConfig::default();
        assert!(config.user_agent.is_none());
        assert!(config.clipboard);
        assert_eq!(config.devtools, cfg!(debug_assertions));
    }
}
