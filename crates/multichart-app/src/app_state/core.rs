//! MultichartApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use multichart_config::{AppConfig, PersistedState};
use multichart_layout::RowLayout;
use multichart_platform::InstallPaths;
use multichart_webview::WebViewRegistry;

use super::placement::BoundsTracker;
use super::session::Session;

/// Top-level application state.
pub struct MultichartApp {
    pub(super) config: AppConfig,
    pub(super) paths: InstallPaths,
    pub(super) session: Session,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) bounds: BoundsTracker,
    pub(super) layout: RowLayout,

    // Browser panes, one per layout row
    pub(super) webviews: Option<WebViewRegistry>,

    // Set when startup failed before the window existed
    pub(super) fatal_error: Option<String>,
}

impl MultichartApp {
    /// `persisted` is the record loaded from the settings store; it is
    /// handed back to the store on close.
    pub fn new(config: AppConfig, paths: InstallPaths, persisted: PersistedState) -> Self {
        let default_urls = config.panes.iter().map(|p| p.default_url.clone()).collect();
        let session = Session::new(persisted, default_urls);
        let bounds = BoundsTracker::new(session.placement());
        let layout = RowLayout::new(session.pane_count() as u32);
        Self {
            config,
            paths,
            session,
            window: None,
            bounds,
            layout,
            webviews: None,
            fatal_error: None,
        }
    }

    /// Startup failure that ended the event loop, if any.
    pub fn fatal_error(&self) -> Option<&str> {
        self.fatal_error.as_deref()
    }
}
