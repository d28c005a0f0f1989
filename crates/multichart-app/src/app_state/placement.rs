//! Initial window placement and restored-bounds tracking.

use multichart_common::WindowBounds;

/// How the window opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum WindowPlacement {
    /// Exactly at these bounds, not maximized.
    Restored(WindowBounds),
    /// Maximized; the OS picks the restore size.
    Maximized,
}

/// Which window event produced a geometry observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum GeometryChange {
    /// The window moved. On Windows this arrives before the maximized flag
    /// is updated, so the flag cannot be trusted here.
    Moved,
    /// The window resized, or a full refresh such as the one at close.
    Resized,
}

/// Tracks the window's restored (un-maximized) bounds across moves,
/// resizes and maximize/minimize toggles.
#[derive(Debug, Clone, Default)]
pub(super) struct BoundsTracker {
    restored: Option<WindowBounds>,
}

impl BoundsTracker {
    pub(super) fn new(placement: WindowPlacement) -> Self {
        match placement {
            WindowPlacement::Restored(bounds) => Self {
                restored: Some(bounds),
            },
            WindowPlacement::Maximized => Self::default(),
        }
    }

    /// Feed the window's current geometry.
    ///
    /// Geometry seen while maximized or minimized is not a restore target
    /// and is ignored. A move only updates the position, and only while the
    /// client size matches the tracked restored size; size changes are taken
    /// from the `Resized` that follows.
    pub(super) fn observe(
        &mut self,
        change: GeometryChange,
        bounds: WindowBounds,
        maximized: bool,
        minimized: bool,
    ) {
        if maximized || minimized || bounds.is_empty() {
            return;
        }
        match change {
            GeometryChange::Resized => self.restored = Some(bounds),
            GeometryChange::Moved => {
                if let Some(restored) = &mut self.restored {
                    if restored.width == bounds.width && restored.height == bounds.height {
                        restored.x = bounds.x;
                        restored.y = bounds.y;
                    }
                }
            }
        }
    }

    /// Bounds to persist. `None` if the window was never seen un-maximized.
    pub(super) fn restored(&self) -> Option<WindowBounds> {
        self.restored
    }
}

#[cfg(test)]
mod tests {
    use super::GeometryChange::{Moved, Resized};
    use super::*;

    #[test]
    fn restored_placement_seeds_tracker() {
        let b = WindowBounds::new(10, 20, 800, 600);
        let tracker = BoundsTracker::new(WindowPlacement::Restored(b));
        assert_eq!(tracker.restored(), Some(b));
    }

    #[test]
    fn maximized_start_has_no_restore_target() {
        let tracker = BoundsTracker::new(WindowPlacement::Maximized);
        assert_eq!(tracker.restored(), None);
    }

    #[test]
    fn normal_moves_update_restored_bounds() {
        let mut tracker = BoundsTracker::new(WindowPlacement::Maximized);
        tracker.observe(Resized, WindowBounds::new(100, 100, 1024, 768), false, false);
        tracker.observe(Moved, WindowBounds::new(150, 120, 1024, 768), false, false);
        assert_eq!(tracker.restored(), Some(WindowBounds::new(150, 120, 1024, 768)));
    }

    #[test]
    fn maximizing_keeps_pre_maximize_bounds() {
        let before = WindowBounds::new(10, 20, 800, 600);
        let mut tracker = BoundsTracker::new(WindowPlacement::Restored(before));

        // Maximize: the OS reports the full-screen frame.
        tracker.observe(Resized, WindowBounds::new(-8, -8, 1936, 1056), true, false);
        assert_eq!(tracker.restored(), Some(before));
    }

    #[test]
    fn maximize_move_before_flag_update_is_ignored() {
        let before = WindowBounds::new(10, 20, 800, 600);
        let maximized = WindowBounds::new(-8, -8, 1920, 1017);
        let mut tracker = BoundsTracker::new(WindowPlacement::Restored(before));

        // Windows order: Moved with the new frame while the flag is still
        // clear, then Resized with the flag set.
        tracker.observe(Moved, maximized, false, false);
        tracker.observe(Resized, maximized, true, false);
        assert_eq!(tracker.restored(), Some(before));
    }

    #[test]
    fn unmaximize_move_before_flag_update_is_ignored() {
        let before = WindowBounds::new(10, 20, 800, 600);
        let mut tracker = BoundsTracker::new(WindowPlacement::Restored(before));
        tracker.observe(Resized, WindowBounds::new(-8, -8, 1920, 1017), true, false);

        // Restore: Moved still sees the maximized flag, Resized clears it.
        tracker.observe(Moved, before, true, false);
        tracker.observe(Resized, before, false, false);
        assert_eq!(tracker.restored(), Some(before));
    }

    #[test]
    fn move_without_known_size_is_ignored() {
        let mut tracker = BoundsTracker::new(WindowPlacement::Maximized);
        tracker.observe(Moved, WindowBounds::new(0, 0, 1920, 1017), false, false);
        assert_eq!(tracker.restored(), None);
    }

    #[test]
    fn minimizing_keeps_previous_bounds() {
        let before = WindowBounds::new(10, 20, 800, 600);
        let mut tracker = BoundsTracker::new(WindowPlacement::Restored(before));

        tracker.observe(Moved, WindowBounds::new(-32000, -32000, 160, 28), false, true);
        tracker.observe(Resized, WindowBounds::new(0, 0, 0, 0), false, false);
        assert_eq!(tracker.restored(), Some(before));
    }

    #[test]
    fn unmaximize_then_resize_updates() {
        let mut tracker = BoundsTracker::new(WindowPlacement::Maximized);
        tracker.observe(Resized, WindowBounds::new(0, 0, 1920, 1080), true, false);
        assert_eq!(tracker.restored(), None);

        tracker.observe(Resized, WindowBounds::new(200, 150, 1280, 720), false, false);
        assert_eq!(tracker.restored(), Some(WindowBounds::new(200, 150, 1280, 720)));
    }
}
