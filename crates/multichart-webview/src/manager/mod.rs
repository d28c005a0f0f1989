//! WebView lifecycle management.
//!
//! `WebViewManager` creates `wry::WebView` instances, one per pane, all
//! sharing a single engine context (profile and cache directory).

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::events::WebViewEvent;

mod handle;
mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use registry::WebViewRegistry;
pub use types::WebViewConfig;

/// Creates WebViews and collects their events.
pub struct WebViewManager {
    /// Event sink. Engine callbacks push here; the event loop drains it.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Engine profile directory shared by every pane.
    data_dir: Option<PathBuf>,
    /// Created with the first WebView so that no engine state exists
    /// before a window does.
    web_context: Option<wry::WebContext>,
}

impl WebViewManager {
    /// Create a manager whose engine data lives under `data_dir`.
    ///
    /// `None` lets the engine pick its own default location.
    pub fn new(data_dir: Option<PathBuf>) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            data_dir,
            web_context: None,
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub(crate) fn push_event(&self, event: WebViewEvent) {
        if let Ok(mut evts) = self.events.lock() {
            evts.push(event);
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new(None)
    }
}
