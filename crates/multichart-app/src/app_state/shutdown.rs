//! Close handling: capture session state, persist it, destroy panes.

use multichart_common::AppState;
use multichart_config::{settings, PersistedState};

use super::bounds::window_bounds;
use super::core::MultichartApp;
use super::placement::GeometryChange;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl MultichartApp {
    /// Persist the session and tear down the panes.
    ///
    /// Order:
    /// 1. Refresh restored bounds from the live window
    /// 2. Capture the address of every ready pane
    /// 3. Save settings (failures are logged and ignored)
    /// 4. Destroy webviews, then the window
    ///
    /// Returns the record that was handed to the settings store, or `None`
    /// if shutdown already ran.
    pub(super) fn shutdown(&mut self) -> Option<PersistedState> {
        if !self.session.advance(AppState::Closing) {
            return None;
        }
        tracing::info!("Initiating shutdown");

        self.observe_window_bounds(GeometryChange::Resized);
        self.poll_webview_events();

        let webviews = self.webviews.as_ref();
        let state = self.session.finish(self.bounds.restored(), |pane_id| {
            webviews
                .and_then(|r| r.get(pane_id))
                .map(|handle| handle.current_url())
        });

        settings::save(&self.paths.settings_file(), &state);

        if let Some(ref mut registry) = self.webviews {
            registry.destroy_all();
        }
        self.webviews = None;
        self.window = None;

        self.session.advance(AppState::Terminated);
        tracing::info!("Shutdown complete");
        Some(state)
    }

    /// Feed the window's current geometry to the restored-bounds tracker.
    pub(super) fn observe_window_bounds(&mut self, change: GeometryChange) {
        let Some(window) = &self.window else {
            return;
        };
        let Ok(position) = window.outer_position() else {
            // Not supported on this platform (e.g. Wayland).
            return;
        };
        let bounds = window_bounds(position, window.inner_size());
        let minimized = window.is_minimized().unwrap_or(false);
        self.bounds
            .observe(change, bounds, window.is_maximized(), minimized);
    }
}

// =============================================================================
// TESTS
// =============================================================================
