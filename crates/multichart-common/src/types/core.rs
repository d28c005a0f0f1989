use std::fmt;

/// Logical-pixel rectangle used for laying out panes inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Position of a pane in creation order (top row is `PaneId(0)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaneId(pub u32);

impl PaneId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pane-{}", self.0)
    }
}

/// Lifecycle of one process run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Starting,
    Ready,
    Closing,
    Terminated,
}

impl AppState {
    /// Whether moving from `self` to `next` is a legal lifecycle step.
    pub fn can_advance_to(self, next: AppState) -> bool {
        matches!(
            (self, next),
            (AppState::Starting, AppState::Ready)
                | (AppState::Starting, AppState::Closing)
                | (AppState::Ready, AppState::Closing)
                | (AppState::Closing, AppState::Terminated)
        )
    }
}
