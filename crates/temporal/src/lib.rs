//! Temporal reconciliation for change-tracked relationships.
//!
//! A tracked link between two issues is valid over a window that may be
//! open or unknown on either side. Reconciling an observed window against
//! the previously stored one decides whether the link must be inserted,
//! kept as is, or updated.

use chrono::NaiveDateTime;

/// Moment type used throughout the importer core.
pub type Timestamp = NaiveDateTime;

/// Validity window of a tracked relationship.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interval {
    /// Moment since which the relationship holds, or `None` when the start
    /// is unknown.
    pub start: Option<Timestamp>,
    /// Moment at which the relationship ceased to hold, or `None` while it
    /// still holds.
    pub end: Option<Timestamp>,
}

impl Interval {
    pub fn new(start: Option<Timestamp>, end: Option<Timestamp>) -> Self {
        Self { start, end }
    }

    /// Window that is unknown on both sides.
    pub fn unknown() -> Self {
        Self::default()
    }
}

/// Outcome of checking an observed interval against stored state.
///
/// The stored interval rides along in the non-missing variants so the
/// pipeline can report what it conflicted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing is stored for the relationship key at all.
    Missing,
    /// The observed interval is compatible with the stored one.
    Exists(Interval),
    /// The observed interval conflicts with the stored one; an update is
    /// required.
    Differs(Interval),
}

/// Compares an observed moment against a stored one.
///
/// Both absent counts as a match. With `allow_earlier`, an observed moment
/// strictly after a present stored one also matches: data gathered
/// incrementally may discover a start date later than first recorded, and
/// that alone must not flag the link as changed. Everything else requires
/// exact equality, so an observed moment with nothing stored is a mismatch.
pub fn timestamps_match(
    observed: Option<Timestamp>,
    stored: Option<Timestamp>,
    allow_earlier: bool,
) -> bool {
    let Some(observed) = observed else {
        return stored.is_none();
    };
    match stored {
        Some(stored) if allow_earlier && observed > stored => true,
        Some(stored) => observed == stored,
        None => false,
    }
}

/// Decides whether an observed validity window matches the stored one.
///
/// Start moments tolerate late discovery; end moments are authoritative
/// because an end date signals the relationship's closure, so any end
/// change in either direction yields [`Verdict::Differs`]. The caller
/// produces [`Verdict::Missing`] itself when no interval is stored for the
/// relationship key being checked.
pub fn reconcile(observed: Interval, stored: Interval) -> Verdict {
    if timestamps_match(observed.start, stored.start, true)
        && timestamps_match(observed.end, stored.end, false)
    {
        Verdict::Exists(stored)
    } else {
        Verdict::Differs(stored)
    }
}
