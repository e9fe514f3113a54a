//! Sprint window lookup.

use trackdump_bisect::bisect_right_by;
use trackdump_temporal::Timestamp;

/// One sprint's temporal extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SprintWindow {
    pub sprint_id: i64,
    /// Moment the sprint starts or is set to start.
    pub start: Timestamp,
    /// Moment the sprint ends, when scheduled.
    pub end: Option<Timestamp>,
    /// Moment the sprint's tasks were completed, when known.
    pub complete: Option<Timestamp>,
}

impl SprintWindow {
    /// Whether the window encompasses the given moment.
    ///
    /// The start must not be after the moment; the end date and the
    /// completion date, where set, must not be before it.
    pub fn contains(&self, date: Timestamp) -> bool {
        if date < self.start {
            return false;
        }
        if self.end.is_some_and(|end| date > end) {
            return false;
        }
        !self.complete.is_some_and(|complete| date > complete)
    }
}

/// Finds the latest sprint whose window contains the date.
///
/// `sprints` must be sorted ascending by start date. Consecutive sprints
/// may overlap around their boundaries, so when the nearest candidate does
/// not contain the date, the window directly before it is consulted too.
pub fn find_sprint(sprints: &[SprintWindow], date: Timestamp) -> Option<i64> {
    let index = bisect_right_by(sprints, |probe| probe.start.cmp(&date));
    if index == 0 {
        // Older than all sprints.
        return None;
    }
    if !sprints[index - 1].contains(date) {
        if index > 1 && sprints[index - 2].contains(date) {
            return Some(sprints[index - 2].sprint_id);
        }
        return None;
    }
    Some(sprints[index - 1].sprint_id)
}
