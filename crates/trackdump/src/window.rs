//! Measurement window mapping over a sorted date sequence.

use std::fmt::Debug;
use std::ops::Range;

use tracing::{info, warn};
use trackdump_bisect::{bisect_left_in, bisect_right_in};

/// Maps successive `[start, end)` measurement windows onto index ranges of
/// a sorted sequence of observation dates.
///
/// The cursor only moves forward: every [`advance`](Self::advance) searches
/// from the end of the previously covered range, and a window that starts
/// before the latest date already covered is clamped to that date, so a
/// re-measured history never re-covers dates that were already emitted.
pub struct WindowIndex<'a, K: Ord> {
    dates: &'a [K],
    previous: usize,
    latest: Option<K>,
}

impl<'a, K: Ord + Clone + Debug> WindowIndex<'a, K> {
    /// Wraps a sequence of observation dates, sorted ascending.
    pub fn new(dates: &'a [K]) -> Self {
        Self {
            dates,
            previous: 0,
            latest: None,
        }
    }

    /// Index range of the dates covered by the window `[start, end)`.
    ///
    /// `None` means the window starts beyond the mapped dates; the cursor
    /// stays put so a later, wider window may still land.
    pub fn advance(&mut self, start: &K, end: &K) -> Option<Range<usize>> {
        let limit = self.dates.len();
        // A start behind the latest covered date is clamped to that date;
        // right bisection keeps the clamped date itself excluded.
        let start_index = match &self.latest {
            Some(latest) if start < latest => {
                bisect_right_in(self.dates, latest, self.previous, limit)
            }
            _ => bisect_left_in(self.dates, start, self.previous, limit),
        };
        if start_index >= limit {
            info!(
                ?start,
                start_index,
                previous = self.previous,
                limit,
                "window start out of the mapped range"
            );
            return None;
        }

        let end_index = bisect_left_in(self.dates, end, start_index, limit);
        self.previous = end_index;
        if self.latest.as_ref().map_or(true, |latest| end > latest) {
            self.latest = Some(end.clone());
        }
        if end_index >= limit {
            warn!(?end, end_index, limit, "window end reached the mapped range limit");
        }
        Some(start_index..end_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates() -> Vec<&'static str> {
        vec![
            "2018-03-01", "2018-03-02", "2018-03-03", "2018-03-04", "2018-03-05",
        ]
    }

    #[test]
    fn window_maps_to_contained_dates() {
        let dates = dates();
        let mut index = WindowIndex::new(&dates);
        assert_eq!(index.advance(&"2018-03-02", &"2018-03-04"), Some(1..3));
    }

    #[test]
    fn successive_windows_advance_monotonically() {
        let dates = dates();
        let mut index = WindowIndex::new(&dates);
        assert_eq!(index.advance(&"2018-03-01", &"2018-03-03"), Some(0..2));
        assert_eq!(index.advance(&"2018-03-03", &"2018-03-05"), Some(2..4));
    }

    #[test]
    fn overlapping_rerun_is_clamped_to_the_latest_date() {
        let dates = dates();
        let mut index = WindowIndex::new(&dates);
        assert_eq!(index.advance(&"2018-03-01", &"2018-03-04"), Some(0..3));
        // A re-measured window reaching back to the 2nd covers only dates
        // strictly past the latest covered moment.
        assert_eq!(index.advance(&"2018-03-02", &"2018-03-09"), Some(4..5));
    }

    #[test]
    fn window_past_the_dates_yields_nothing() {
        let dates = dates();
        let mut index = WindowIndex::new(&dates);
        assert_eq!(index.advance(&"2018-03-09", &"2018-03-12"), None);
        // The cursor did not move; earlier windows still land.
        assert_eq!(index.advance(&"2018-03-01", &"2018-03-02"), Some(0..1));
    }

    #[test]
    fn empty_window_covers_no_dates() {
        let dates = dates();
        let mut index = WindowIndex::new(&dates);
        assert_eq!(index.advance(&"2018-03-02", &"2018-03-02"), Some(1..1));
    }

    #[test]
    fn window_reaching_the_limit_still_reports_its_range() {
        let dates = dates();
        let mut index = WindowIndex::new(&dates);
        assert_eq!(index.advance(&"2018-03-04", &"2018-03-09"), Some(3..5));
    }
}
