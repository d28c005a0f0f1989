use std::sync::Arc;

use multichart_common::PaneId;
use tracing::{debug, warn};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::readiness::ReadySender;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a blank WebView as a child of `window`, positioned at `bounds`.
    ///
    /// The outcome is reported through `ready` as well as the return value;
    /// the event loop reacts to the signal, the caller only logs.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        pane_id: PaneId,
        window: &W,
        bounds: wry::Rect,
        config: &WebViewConfig,
        ready: ReadySender,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let data_dir = self.data_dir.clone();
        let web_context = self
            .web_context
            .get_or_insert_with(|| wry::WebContext::new(data_dir));

        let mut builder = WebViewBuilder::with_web_context(web_context)
            .with_bounds(bounds)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_focused(false)
            .with_url("about:blank");

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_page_load_handler(builder, events, pane_id);

        match builder.build_as_child(window) {
            Ok(webview) => {
                debug!(%pane_id, "WebView created");
                ready.complete(Ok(()));
                Ok(WebViewHandle::new(webview))
            }
            Err(e) => {
                warn!(%pane_id, error = %e, "WebView creation failed");
                ready.complete(Err(e.to_string()));
                Err(e)
            }
        }
    }
}
