use crate::{game::geometry::BoardGeometry, models::Position};

/// Interactive trace state: `Idle -> Selecting -> Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionTracker {
    #[default]
    Idle,
    Selecting { path: Vec<Position> },
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell-down: start a new trace, discarding any unfinished one.
    pub fn press(&mut self, pos: Position) {
        *self = SelectionTracker::Selecting { path: vec![pos] };
    }

    /// Cell-move: extend the trace only if it stays a straight line.
    /// Returns whether the path grew.
    pub fn drag(&mut self, pos: Position) -> bool {
        let SelectionTracker::Selecting { path } = self else {
            return false;
        };

        if path.last() == Some(&pos) {
            return false;
        }

        path.push(pos);
        if BoardGeometry::is_valid_linear_selection(path) {
            true
        } else {
            path.pop();
            false
        }
    }

    /// Cell-up: hand back the traced path and return to idle.
    pub fn release(&mut self) -> Option<Vec<Position>> {
        match std::mem::take(self) {
            SelectionTracker::Selecting { path } => Some(path),
            SelectionTracker::Idle => None,
        }
    }

    pub fn path(&self) -> &[Position] {
        match self {
            SelectionTracker::Selecting { path } => path,
            SelectionTracker::Idle => &[],
        }
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self, SelectionTracker::Selecting { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_drag_grows_path() {
        let mut tracker = SelectionTracker::new();
        tracker.press(Position::new(0, 0));
        assert!(tracker.drag(Position::new(1, 1)));
        assert!(tracker.drag(Position::new(2, 2)));
        assert_eq!(
            tracker.release(),
            Some(vec![Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)])
        );
        assert!(!tracker.is_selecting());
    }

    #[test]
    fn test_off_line_drag_is_ignored() {
        let mut tracker = SelectionTracker::new();
        tracker.press(Position::new(0, 0));
        assert!(tracker.drag(Position::new(1, 1)));
        // Turning horizontal is rejected, the gesture continues
        assert!(!tracker.drag(Position::new(1, 2)));
        assert_eq!(tracker.path().len(), 2);
        assert!(tracker.drag(Position::new(2, 2)));
        assert_eq!(tracker.path().len(), 3);
    }

    #[test]
    fn test_hovering_same_cell_is_noop() {
        let mut tracker = SelectionTracker::new();
        tracker.press(Position::new(3, 3));
        assert!(!tracker.drag(Position::new(3, 3)));
        assert_eq!(tracker.path(), &[Position::new(3, 3)]);
    }

    #[test]
    fn test_idle_ignores_drag_and_release() {
        let mut tracker = SelectionTracker::new();
        assert!(!tracker.drag(Position::new(0, 1)));
        assert_eq!(tracker.release(), None);
        assert!(tracker.path().is_empty());
    }

    #[test]
    fn test_press_restarts_trace() {
        let mut tracker = SelectionTracker::new();
        tracker.press(Position::new(0, 0));
        tracker.drag(Position::new(0, 1));
        tracker.press(Position::new(4, 4));
        assert_eq!(tracker.path(), &[Position::new(4, 4)]);
    }
}
