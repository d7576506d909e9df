mod transition;

use serde::{Deserialize, Serialize};

pub use transition::{ScaleTransition, Transition, TransitionClock, ease_cubic_in_out};

/// Per-mark pointer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
}

/// Outcome of feeding a pointer sample into `HoverTracker`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverChange {
    Entered { index: usize },
    Left { index: usize },
}

/// Hover state machine for every mark; at most one mark is hovered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HoverTracker {
    states: Vec<HoverState>,
    hovered: Option<usize>,
}

impl HoverTracker {
    #[must_use]
    pub fn new(mark_count: usize) -> Self {
        Self {
            states: vec![HoverState::Idle; mark_count],
            hovered: None,
        }
    }

    /// Drops all hover state; used whenever tooltips are reattached.
    ///
    /// Reports a leave edge for the mark that was hovered, if any.
    pub fn reset(&mut self, mark_count: usize) -> Vec<HoverChange> {
        let changes = self
            .hovered
            .take()
            .map(|index| HoverChange::Left { index })
            .into_iter()
            .collect();
        self.states.clear();
        self.states.resize(mark_count, HoverState::Idle);
        changes
    }

    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<HoverState> {
        self.states.get(index).copied()
    }

    /// Moves the hover to `target` (or to nothing) and reports the edges.
    ///
    /// Returns at most a leave followed by an enter.
    pub fn update(&mut self, target: Option<usize>) -> Vec<HoverChange> {
        let target = target.filter(|index| *index < self.states.len());
        if target == self.hovered {
            return Vec::new();
        }

        let mut changes = Vec::with_capacity(2);
        if let Some(previous) = self.hovered.take() {
            self.states[previous] = HoverState::Idle;
            changes.push(HoverChange::Left { index: previous });
        }
        if let Some(index) = target {
            self.states[index] = HoverState::Hovered;
            self.hovered = Some(index);
            changes.push(HoverChange::Entered { index });
        }
        changes
    }

    pub fn on_pointer_leave(&mut self) -> Vec<HoverChange> {
        self.update(None)
    }
}

#[cfg(test)]
mod tests {
    use super::{HoverChange, HoverState, HoverTracker};

    #[test]
    fn moving_between_marks_leaves_then_enters() {
        let mut tracker = HoverTracker::new(3);
        assert_eq!(tracker.update(Some(0)), vec![HoverChange::Entered { index: 0 }]);
        assert_eq!(
            tracker.update(Some(2)),
            vec![
                HoverChange::Left { index: 0 },
                HoverChange::Entered { index: 2 }
            ]
        );
        assert_eq!(tracker.state(0), Some(HoverState::Idle));
        assert_eq!(tracker.state(2), Some(HoverState::Hovered));
    }

    #[test]
    fn out_of_range_target_is_treated_as_no_mark() {
        let mut tracker = HoverTracker::new(1);
        assert!(tracker.update(Some(5)).is_empty());
        assert_eq!(tracker.hovered(), None);
    }

    #[test]
    fn reset_reports_leave_for_hovered_mark() {
        let mut tracker = HoverTracker::new(2);
        tracker.update(Some(1));

        assert_eq!(tracker.reset(2), vec![HoverChange::Left { index: 1 }]);
        assert_eq!(tracker.hovered(), None);
        assert_eq!(tracker.state(1), Some(HoverState::Idle));
        assert!(tracker.reset(2).is_empty());
    }
}
