//! Pane lifecycle: create, lay out, react to readiness, track addresses.

use multichart_common::PaneId;
use multichart_webview::{PageLoadState, WebViewEvent};

use super::bounds::{layout_rect_to_wry, viewport};
use super::core::MultichartApp;
use super::session::{PaneAction, PaneStatus};

// =============================================================================
// PANE LIFECYCLE
// =============================================================================

impl MultichartApp {
    /// Create one blank pane per layout row, top to bottom.
    ///
    /// Panes navigate later, once their engine reports ready.
    pub(super) fn create_panes(&mut self) {
        let Some(window) = &self.window else {
            tracing::warn!("Cannot create panes: no window");
            return;
        };
        let Some(registry) = &mut self.webviews else {
            tracing::warn!("Cannot create panes: registry not initialized");
            return;
        };

        let vp = viewport(window.inner_size(), window.scale_factor());
        for (pane_id, rect) in self.layout.compute(vp) {
            let bounds = layout_rect_to_wry(&rect);
            match registry.create(pane_id, window.as_ref(), bounds) {
                Ok(()) => tracing::info!(%pane_id, "Pane created"),
                // Reported to the user through the readiness signal.
                Err(e) => tracing::error!(%pane_id, error = %e, "Failed to create pane"),
            }
        }
    }

    /// Sync all pane bounds to the current window size.
    pub(super) fn sync_pane_bounds(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let Some(registry) = &self.webviews else {
            return;
        };

        let vp = viewport(window.inner_size(), window.scale_factor());
        for (pane_id, rect) in self.layout.compute(vp) {
            if let Some(handle) = registry.get(pane_id) {
                if let Err(e) = handle.set_bounds(layout_rect_to_wry(&rect)) {
                    tracing::warn!(%pane_id, error = %e, "Failed to update pane bounds");
                }
            }
        }
    }

    /// Handle readiness outcomes that arrived since the last poll.
    ///
    /// Returns `true` while any pane is still waiting on its engine.
    pub(super) fn poll_pane_readiness(&mut self) -> bool {
        let Some(registry) = &mut self.webviews else {
            return false;
        };

        for (pane_id, outcome) in registry.poll_readiness() {
            match self.session.on_pane_outcome(pane_id, &outcome) {
                PaneAction::Navigate(url) => self.navigate_pane(pane_id, &url),
                PaneAction::ReportFailure(error) => self.report_pane_failure(pane_id, &error),
                PaneAction::Nothing => {
                    tracing::debug!(%pane_id, ?outcome, "pane settled without navigation");
                }
            }
        }

        (0..self.session.pane_count())
            .any(|i| self.session.pane_status(PaneId(i as u32)) == Some(PaneStatus::Pending))
    }

    fn navigate_pane(&mut self, pane_id: PaneId, url: &str) {
        let Some(handle) = self.webviews.as_mut().and_then(|r| r.get_mut(pane_id)) else {
            tracing::warn!(%pane_id, "Cannot navigate: pane has no webview");
            return;
        };
        match handle.load_url(url) {
            Ok(()) => tracing::info!(%pane_id, url, "Pane navigating"),
            Err(e) => tracing::warn!(%pane_id, url, error = %e, "Navigation failed"),
        }
    }

    /// Block on a dialog naming the engine error. The pane stays blank.
    fn report_pane_failure(&self, pane_id: PaneId, error: &str) {
        tracing::error!(%pane_id, error, "Pane engine failed to initialize");
        let message = multichart_platform::dialog::pane_init_failure_message(pane_id.index(), error);
        multichart_platform::show_error(&self.config.window.title, &message);
    }

    /// Drain engine events; URL tracking happens in the registry.
    pub(super) fn poll_webview_events(&mut self) {
        let events: Vec<WebViewEvent> = match &mut self.webviews {
            Some(registry) => registry.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::PageLoad {
                    pane_id,
                    state: PageLoadState::Finished,
                    url,
                } => {
                    tracing::debug!(%pane_id, url = %url, "page loaded");
                }
                WebViewEvent::Closed { pane_id } => {
                    tracing::debug!(%pane_id, "pane closed");
                }
                _ => {}
            }
        }
    }
}
