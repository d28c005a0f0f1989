//! Session state machine: Starting → Ready → Closing → Terminated.
//!
//! Pure bookkeeping with no window or engine access. Decides where the
//! window goes, where each pane navigates once ready, and what gets
//! persisted on close.

use multichart_common::{AppState, PaneId, WindowBounds};
use multichart_config::PersistedState;
use multichart_webview::InitOutcome;

use super::placement::WindowPlacement;

/// Per-pane engine status as seen by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PaneStatus {
    /// Engine has not reported yet.
    Pending,
    /// Engine reported ready; the pane has been told where to go.
    Ready,
    /// Engine reported failure; the pane stays blank.
    Failed,
    /// Engine went away without reporting; the pane stays blank.
    Idle,
}

/// What the controller must do in response to a readiness outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum PaneAction {
    Navigate(String),
    ReportFailure(String),
    Nothing,
}

#[derive(Debug)]
pub(super) struct Session {
    state: AppState,
    persisted: PersistedState,
    default_urls: Vec<String>,
    panes: Vec<PaneStatus>,
}

impl Session {
    /// One pane per default URL; `persisted` is fitted to that count.
    pub(super) fn new(persisted: PersistedState, default_urls: Vec<String>) -> Self {
        let panes = vec![PaneStatus::Pending; default_urls.len()];
        Self {
            state: AppState::Starting,
            persisted: persisted.fit_to(default_urls.len()),
            default_urls,
            panes,
        }
    }

    pub(super) fn state(&self) -> AppState {
        self.state
    }

    /// Move to `next` if the lifecycle allows it.
    pub(super) fn advance(&mut self, next: AppState) -> bool {
        if self.state.can_advance_to(next) {
            tracing::debug!(from = ?self.state, to = ?next, "session state");
            self.state = next;
            true
        } else {
            false
        }
    }

    pub(super) fn pane_count(&self) -> usize {
        self.panes.len()
    }

    pub(super) fn pane_status(&self, pane: PaneId) -> Option<PaneStatus> {
        self.panes.get(pane.index()).copied()
    }

    /// Restored bounds if any were persisted, otherwise maximized.
    pub(super) fn placement(&self) -> WindowPlacement {
        match self.persisted.window_bounds {
            Some(bounds) => WindowPlacement::Restored(bounds),
            None => WindowPlacement::Maximized,
        }
    }

    /// Where a pane goes once its engine is ready.
    pub(super) fn navigation_target(&self, pane: PaneId) -> Option<&str> {
        let i = pane.index();
        self.persisted
            .last_url(i)
            .or_else(|| self.default_urls.get(i).map(String::as_str))
    }

    /// Record an engine outcome and say what to do about it.
    pub(super) fn on_pane_outcome(&mut self, pane: PaneId, outcome: &InitOutcome) -> PaneAction {
        let Some(status) = self.panes.get(pane.index()).copied() else {
            return PaneAction::Nothing;
        };
        if status != PaneStatus::Pending {
            return PaneAction::Nothing;
        }

        match outcome {
            InitOutcome::Pending => PaneAction::Nothing,
            InitOutcome::Ready => {
                self.panes[pane.index()] = PaneStatus::Ready;
                match self.navigation_target(pane) {
                    Some(url) => PaneAction::Navigate(url.to_string()),
                    None => PaneAction::Nothing,
                }
            }
            InitOutcome::Failed(error) => {
                self.panes[pane.index()] = PaneStatus::Failed;
                PaneAction::ReportFailure(error.clone())
            }
            InitOutcome::Abandoned => {
                self.panes[pane.index()] = PaneStatus::Idle;
                PaneAction::Nothing
            }
        }
    }

    /// Build the record to persist on close.
    ///
    /// `bounds` replaces the persisted bounds when known. `current_url` is
    /// asked only for ready panes; a pane that never became ready, or that
    /// reports no real address, keeps its previously persisted URL.
    pub(super) fn finish(
        &mut self,
        bounds: Option<WindowBounds>,
        current_url: impl Fn(PaneId) -> Option<String>,
    ) -> PersistedState {
        if let Some(bounds) = bounds.filter(|b| !b.is_empty()) {
            self.persisted.window_bounds = Some(bounds);
        }

        for (i, status) in self.panes.iter().enumerate() {
            if *status != PaneStatus::Ready {
                continue;
            }
            let pane = PaneId(i as u32);
            if let Some(url) = current_url(pane).filter(|u| is_real_address(u)) {
                self.persisted.set_last_url(i, url);
            }
        }

        self.persisted.clone()
    }
}

/// The engine reports `about:blank` before the first navigation commits.
fn is_real_address(url: &str) -> bool {
    !url.is_empty() && url != "about:blank"
}
