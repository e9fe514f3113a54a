//! Bisection search over sorted slices.
//!
//! Locates the index at which a key should be inserted into a caller-owned
//! ascending sequence to keep it sorted. The sequence is never mutated and
//! never copied; subrange forms restrict the search to `[from, to)` and the
//! `_by` forms take a comparator for sequences whose elements are bisected
//! through a projected key.
//!
//! Every function requires the (sub)sequence to be sorted ascending under
//! the comparison in use. If it is not, the result is unspecified.

use std::cmp::Ordering;

/// Locates the insertion point for `key` that keeps `seq` sorted, placing
/// the key after any elements equal to it.
///
/// The returned index `i` is exact: every element before `i` is `<= key`
/// and every element from `i` onward is `> key`, duplicates or not.
pub fn bisect_right<K: Ord>(seq: &[K], key: &K) -> usize {
    bisect_right_in(seq, key, 0, seq.len())
}

/// Locates the insertion point for `key` that keeps `seq` sorted, placing
/// the key before any elements equal to it.
///
/// If the sequence contains multiple elements equal to `key`, there is no
/// guarantee which of their positions is returned; callers that need the
/// leftmost position must ensure the key is unique in the sequence.
pub fn bisect_left<K: Ord>(seq: &[K], key: &K) -> usize {
    bisect_left_in(seq, key, 0, seq.len())
}

/// [`bisect_right`] restricted to the subrange `[from, to)`.
pub fn bisect_right_in<K: Ord>(seq: &[K], key: &K, from: usize, to: usize) -> usize {
    bisect_right_in_by(seq, from, to, |probe| probe.cmp(key))
}

/// [`bisect_left`] restricted to the subrange `[from, to)`.
pub fn bisect_left_in<K: Ord>(seq: &[K], key: &K, from: usize, to: usize) -> usize {
    bisect_left_in_by(seq, from, to, |probe| probe.cmp(key))
}

/// Comparator form of [`bisect_right`].
///
/// `cmp` orders a probe element against the target key, as in
/// [`slice::binary_search_by`].
pub fn bisect_right_by<T, F>(seq: &[T], cmp: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    bisect_right_in_by(seq, 0, seq.len(), cmp)
}

/// Comparator form of [`bisect_left`].
pub fn bisect_left_by<T, F>(seq: &[T], cmp: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    bisect_left_in_by(seq, 0, seq.len(), cmp)
}

/// Comparator form of [`bisect_right_in`].
pub fn bisect_right_in_by<T, F>(seq: &[T], from: usize, to: usize, mut cmp: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    from + seq[from..to].partition_point(|probe| cmp(probe) != Ordering::Greater)
}

/// Comparator form of [`bisect_left_in`].
pub fn bisect_left_in_by<T, F>(seq: &[T], from: usize, to: usize, cmp: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    // A hit lands on an unspecified one of the equal elements; a miss is
    // the unique insertion point. Both are valid left insertion points.
    match seq[from..to].binary_search_by(cmp) {
        Ok(index) | Err(index) => from + index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn moment(date: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn sample_dates() -> Vec<NaiveDateTime> {
        vec![
            moment("2017-01-01 10:00:00"),
            moment("2017-02-01 10:00:00"),
            moment("2017-03-01 10:00:00"),
            moment("2017-04-01 10:00:00"),
        ]
    }

    #[test]
    fn key_before_all_elements() {
        let dates = sample_dates();
        let key = moment("2016-12-31 12:34:56");
        assert_eq!(bisect_right(&dates, &key), 0);
        assert_eq!(bisect_left(&dates, &key), 0);
    }

    #[test]
    fn key_between_elements() {
        let dates = sample_dates();
        let key = moment("2017-02-02 10:10:10");
        assert_eq!(bisect_right(&dates, &key), 2);
        assert_eq!(bisect_left(&dates, &key), 2);
    }

    #[test]
    fn key_equal_to_an_element() {
        let dates = sample_dates();
        let key = moment("2017-02-01 10:00:00");
        assert_eq!(bisect_right(&dates, &key), 2);
        assert_eq!(bisect_left(&dates, &key), 1);
    }

    #[test]
    fn key_after_all_elements() {
        let dates = sample_dates();
        let key = moment("2017-04-04 10:20:30");
        assert_eq!(bisect_right(&dates, &key), 4);
        assert_eq!(bisect_left(&dates, &key), 4);
    }

    #[test]
    fn right_is_exact_among_duplicates() {
        let seq = [1, 2, 2, 2, 3];
        assert_eq!(bisect_right(&seq, &2), 4);
        assert_eq!(bisect_right(&seq, &1), 1);
        assert_eq!(bisect_right(&seq, &3), 5);
    }

    #[test]
    fn left_lands_on_some_duplicate() {
        // The left contract among duplicates is "any equal position", not
        // "the first one".
        let seq = [1, 2, 2, 2, 3];
        let index = bisect_left(&seq, &2);
        assert!((1..=3).contains(&index), "index {index} outside the run");
        assert_eq!(seq[index], 2);
    }

    #[test]
    fn empty_sequence() {
        let seq: [i32; 0] = [];
        assert_eq!(bisect_right(&seq, &7), 0);
        assert_eq!(bisect_left(&seq, &7), 0);
    }

    #[test]
    fn subrange_search() {
        let dates = ["2018-01-01", "2018-01-08", "2018-01-15", "2018-01-22"];
        assert_eq!(bisect_left_in(&dates, &"2018-01-15", 1, 4), 2);
        assert_eq!(bisect_right_in(&dates, &"2018-01-15", 1, 4), 3);
        // An empty subrange collapses to its start.
        assert_eq!(bisect_left_in(&dates, &"2018-01-15", 2, 2), 2);
    }

    #[test]
    fn subrange_excludes_outside_elements() {
        let seq = [10, 20, 30, 40, 50];
        assert_eq!(bisect_left_in(&seq, &10, 2, 5), 2);
        assert_eq!(bisect_right_in(&seq, &60, 1, 3), 3);
    }

    #[test]
    fn comparator_forms_match_key_forms() {
        struct Labeled {
            at: i64,
        }
        let seq = [
            Labeled { at: 3 },
            Labeled { at: 6 },
            Labeled { at: 6 },
            Labeled { at: 9 },
        ];
        let keys: Vec<i64> = seq.iter().map(|item| item.at).collect();
        for key in [0, 3, 5, 6, 9, 12] {
            assert_eq!(
                bisect_right_by(&seq, |probe| probe.at.cmp(&key)),
                bisect_right(&keys, &key),
            );
            let left = bisect_left_by(&seq, |probe| probe.at.cmp(&key));
            if keys.contains(&key) {
                assert_eq!(seq[left].at, key);
            } else {
                assert_eq!(left, bisect_left(&keys, &key));
            }
        }
    }

    #[test]
    fn date_keys_through_comparator() {
        let windows = [
            NaiveDate::from_ymd_opt(2019, 3, 4).unwrap(),
            NaiveDate::from_ymd_opt(2019, 3, 18).unwrap(),
            NaiveDate::from_ymd_opt(2019, 4, 1).unwrap(),
        ];
        let key = NaiveDate::from_ymd_opt(2019, 3, 20).unwrap();
        assert_eq!(bisect_right_by(&windows, |probe| probe.cmp(&key)), 2);
    }
}
