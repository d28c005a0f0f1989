use multichart_common::WindowBounds;
use serde::{Deserialize, Deserializer, Serialize};

/// Session state carried from one run to the next.
///
/// Owned by the window controller for the whole run: handed in by
/// [`super::load`] at startup, handed back to [`super::save`] at shutdown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    /// Window placement; `None` means "start maximized".
    #[serde(default, alias = "WindowBounds")]
    pub window_bounds: Option<WindowBounds>,
    /// Last address per pane, index-aligned with pane creation order.
    /// An empty string means "use the pane's default address".
    #[serde(default, alias = "LastUrls", deserialize_with = "nullable_urls")]
    pub last_urls: Vec<String>,
}

impl PersistedState {
    /// First-run state: no bounds, an empty URL for every pane.
    pub fn new(pane_count: usize) -> Self {
        Self {
            window_bounds: None,
            last_urls: vec![String::new(); pane_count],
        }
    }

    /// Normalize a freshly parsed record to `pane_count` panes.
    ///
    /// Pads or truncates `last_urls` and maps the zero-area sentinel to `None`.
    pub fn fit_to(mut self, pane_count: usize) -> Self {
        self.last_urls.resize(pane_count, String::new());
        if self.window_bounds.is_some_and(|b| b.is_empty()) {
            self.window_bounds = None;
        }
        self
    }

    /// The persisted address for pane `index`, if one was recorded.
    pub fn last_url(&self, index: usize) -> Option<&str> {
        self.last_urls
            .get(index)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }

    /// Record the address of pane `index`, growing the list if needed.
    pub fn set_last_url(&mut self, index: usize, url: impl Into<String>) {
        if index >= self.last_urls.len() {
            self.last_urls.resize(index + 1, String::new());
        }
        self.last_urls[index] = url.into();
    }
}

/// Accept `null` entries (written by older builds) as empty strings.
fn nullable_urls<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}
