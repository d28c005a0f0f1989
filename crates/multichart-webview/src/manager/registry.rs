use std::collections::BTreeMap;

use multichart_common::PaneId;
use tracing::debug;
use wry::raw_window_handle;

use crate::events::{PageLoadState, WebViewEvent};
use crate::readiness::{self, InitOutcome, ReadyReceiver};

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Maps pane IDs to WebView handles and their readiness signals.
pub struct WebViewRegistry {
    manager: WebViewManager,
    config: WebViewConfig,
    handles: BTreeMap<PaneId, WebViewHandle>,
    pending: BTreeMap<PaneId, ReadyReceiver>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager, config: WebViewConfig) -> Self {
        Self {
            manager,
            config,
            handles: BTreeMap::new(),
            pending: BTreeMap::new(),
        }
    }

    /// Create a WebView for a pane and register it.
    ///
    /// The readiness outcome (success or failure) is delivered later by
    /// [`Self::poll_readiness`], never from this call.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        pane_id: PaneId,
        window: &W,
        bounds: wry::Rect,
    ) -> Result<(), wry::Error> {
        let (tx, rx) = readiness::channel();
        self.pending.insert(pane_id, rx);
        let handle = self
            .manager
            .create(pane_id, window, bounds, &self.config, tx)?;
        self.handles.insert(pane_id, handle);
        Ok(())
    }

    /// Collect readiness outcomes that arrived since the last poll.
    ///
    /// Each pane's final outcome is returned exactly once.
    pub fn poll_readiness(&mut self) -> Vec<(PaneId, InitOutcome)> {
        let mut settled = Vec::new();
        for (pane_id, rx) in self.pending.iter_mut() {
            match rx.poll() {
                InitOutcome::Pending => {}
                outcome => settled.push((*pane_id, outcome)),
            }
        }

        for (pane_id, _) in &settled {
            self.pending.remove(pane_id);
        }
        settled
    }

    pub fn get(&self, pane_id: PaneId) -> Option<&WebViewHandle> {
        self.handles.get(&pane_id)
    }

    pub fn get_mut(&mut self, pane_id: PaneId) -> Option<&mut WebViewHandle> {
        self.handles.get_mut(&pane_id)
    }

    /// Destroy a WebView by pane ID.
    pub fn destroy(&mut self, pane_id: PaneId) -> bool {
        self.pending.remove(&pane_id);
        if self.handles.remove(&pane_id).is_some() {
            debug!(%pane_id, "WebView destroyed");
            self.manager.push_event(WebViewEvent::Closed { pane_id });
            true
        } else {
            false
        }
    }

    /// All pane IDs with a live WebView, in creation order.
    pub fn active_panes(&self) -> Vec<PaneId> {
        self.handles.keys().copied().collect()
    }

    /// Drain pending events, recording finished page loads on the handles.
    pub fn drain_events(&mut self) -> Vec<WebViewEvent> {
        let events = self.manager.drain_events();
        for event in &events {
            if let WebViewEvent::PageLoad {
                pane_id,
                state: PageLoadState::Finished,
                url,
            } = event
            {
                if let Some(handle) = self.handles.get_mut(pane_id) {
                    handle.set_tracked_url(url.clone());
                }
            }
        }
        events
    }

    /// Destroy all active WebViews. Used during shutdown.
    pub fn destroy_all(&mut self) {
        for pane_id in self.active_panes() {
            self.destroy(pane_id);
        }
        self.pending.clear();
    }
}
