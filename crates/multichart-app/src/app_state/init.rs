//! Window creation and pane setup.

use std::sync::Arc;

use winit::dpi::{LogicalSize, PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Icon, Theme, WindowAttributes};

use multichart_common::AppState;
use multichart_platform::AppIcon;
use multichart_webview::{WebViewConfig, WebViewManager, WebViewRegistry};

use super::core::MultichartApp;
use super::placement::WindowPlacement;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl MultichartApp {
    /// Create the window and its panes.
    /// Returns `false` if the window could not be created.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = self.window_attributes();

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                self.fatal_error = Some(format!("failed to create window: {e}"));
                return false;
            }
        };

        self.window = Some(window);
        self.initialize_webviews();
        self.create_panes();

        self.session.advance(AppState::Ready);
        tracing::info!(panes = self.session.pane_count(), "Window created");
        true
    }

    /// Window attributes for the persisted placement and configured chrome.
    pub(super) fn window_attributes(&self) -> WindowAttributes {
        let cfg = &self.config.window;
        let mut attrs = WindowAttributes::default()
            .with_title(cfg.title.clone())
            .with_min_inner_size(LogicalSize::new(cfg.min_width, cfg.min_height))
            .with_window_icon(window_icon(AppIcon::resolve(&self.paths.icon_file())));

        if cfg.dark_titlebar {
            attrs = attrs.with_theme(Some(Theme::Dark));
        }

        match self.session.placement() {
            WindowPlacement::Restored(b) => {
                tracing::debug!(?b, "restoring window bounds");
                attrs
                    .with_position(PhysicalPosition::new(b.x, b.y))
                    .with_inner_size(PhysicalSize::new(b.width, b.height))
                    .with_maximized(false)
            }
            WindowPlacement::Maximized => attrs.with_maximized(true),
        }
    }

    /// Set up the WebView registry with its engine profile directory.
    fn initialize_webviews(&mut self) {
        let cache_dir = match self.paths.ensure_cache_dir() {
            Ok(dir) => dir,
            Err(e) => {
                // The engine reports its own failure if it cannot use it.
                tracing::warn!("{e}");
                self.paths.cache_dir()
            }
        };

        let manager = WebViewManager::new(Some(cache_dir.clone()));
        self.webviews = Some(WebViewRegistry::new(manager, WebViewConfig::default()));
        tracing::info!(
            cache_dir = %cache_dir.display(),
            "WebView registry initialized"
        );
    }
}

fn window_icon(icon: AppIcon) -> Option<Icon> {
    match Icon::from_rgba(icon.rgba, icon.width, icon.height) {
        Ok(icon) => Some(icon),
        Err(e) => {
            tracing::warn!(error = %e, "invalid window icon");
            None
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::app_state::core::MultichartApp;
    use multichart_common::WindowBounds;
    use multichart_config::{AppConfig, PersistedState};
    use multichart_platform::InstallPaths;
    use std::path::Path;

    fn app(persisted: PersistedState) -> MultichartApp {
        let paths = InstallPaths::from_exe(Path::new("/opt/charts/multichart")).unwrap();
        MultichartApp::new(AppConfig::default(), paths, persisted)
    }

    #[test]
    fn restored_attributes_are_not_maximized() {
        let persisted = PersistedState {
            window_bounds: Some(WindowBounds::new(10, 20, 800, 600)),
            last_urls: Vec::new(),
        };
        let attrs = app(persisted).window_attributes();

        assert!(!attrs.maximized);
        assert!(attrs.position.is_some());
        assert!(attrs.inner_size.is_some());
        assert_eq!(attrs.title, "OKX Multichart");
    }

    #[test]
    fn builtin_icon_is_applied_without_icon_file() {
        let attrs = app(PersistedState::new(3)).window_attributes();
        assert!(attrs.window_icon.is_some());
    }

    #[test]
    fn first_run_attributes_are_maximized() {
        let attrs = app(PersistedState::new(3)).window_attributes();

        assert!(attrs.maximized);
        assert!(attrs.position.is_none());
    }

    #[test]
    fn dark_titlebar_follows_config() {
        let attrs = app(PersistedState::new(3)).window_attributes();
        assert_eq!(attrs.preferred_theme, Some(winit::window::Theme::Dark));

        let mut config = AppConfig::default();
        config.window.dark_titlebar = false;
        let paths = InstallPaths::from_exe(Path::new("/opt/charts/multichart")).unwrap();
        let attrs = MultichartApp::new(config, paths, PersistedState::new(3)).window_attributes();
        assert_eq!(attrs.preferred_theme, None);
    }
}
