use wry::WebView;

/// Handle to a managed WebView instance.
pub struct WebViewHandle {
    /// The underlying wry WebView.
    webview: WebView,
    /// Last URL reported by a page load; fallback when the engine
    /// cannot be queried.
    tracked_url: String,
}

impl WebViewHandle {
    pub(super) fn new(webview: WebView) -> Self {
        Self {
            webview,
            tracked_url: String::new(),
        }
    }

    /// The address currently shown, asked of the engine directly.
    ///
    /// Falls back to the last page-load URL if the query fails.
    pub fn current_url(&self) -> String {
        match self.webview.url() {
            Ok(url) if !url.is_empty() => url,
            _ => self.tracked_url.clone(),
        }
    }

    /// Navigate to a URL.
    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.tracked_url = url.to_string();
        self.webview.load_url(url)
    }

    /// Set the WebView bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub(super) fn set_tracked_url(&mut self, url: String) {
        self.tracked_url = url;
    }
}
