mod bounds;
mod core;

pub use self::core::*;
pub use bounds::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let r2 = r;
        assert_eq!(r, r2);
    }

    #[test]
    fn pane_id_display() {
        assert_eq!(PaneId(0).to_string(), "pane-0");
        assert_eq!(PaneId(2).to_string(), "pane-2");
    }

    #[test]
    fn pane_id_index() {
        assert_eq!(PaneId(1).index(), 1);
    }

    #[test]
    fn app_state_starts_in_starting() {
        assert_eq!(AppState::default(), AppState::Starting);
    }

    #[test]
    fn app_state_transitions_are_forward_only() {
        assert!(AppState::Starting.can_advance_to(AppState::Ready));
        assert!(AppState::Ready.can_advance_to(AppState::Closing));
        assert!(AppState::Closing.can_advance_to(AppState::Terminated));
        // Closing before the window finished starting is allowed.
        assert!(AppState::Starting.can_advance_to(AppState::Closing));

        assert!(!AppState::Ready.can_advance_to(AppState::Starting));
        assert!(!AppState::Terminated.can_advance_to(AppState::Ready));
        assert!(!AppState::Closing.can_advance_to(AppState::Closing));
    }
}
