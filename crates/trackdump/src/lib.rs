//! Core utilities for importing exported issue-tracking data.
//!
//! The leaves do the algorithmic work: [`bisect`] locates insertion points
//! in sorted sequences, [`StreamDecoder`] pulls values out of array-shaped
//! dump files one at a time, [`reconcile`] produces verdicts for
//! change-tracked relationship intervals, and [`Replacer`] rewrites many
//! fixed substrings in one pass. On top of them sit the helpers the import
//! pipeline reaches for directly: sprint window lookup, measurement window
//! mapping, and sanitizer presets for legacy export rows.

pub use trackdump_bisect as bisect;
pub use trackdump_replace::Replacer;
pub use trackdump_stream::{
    Decoded, FramingError, JsonValueDecoder, Record, StreamDecoder, StreamEncoder, ValueDecoder,
};
pub use trackdump_temporal::{reconcile, timestamps_match, Interval, Timestamp, Verdict};

pub mod sanitize;
pub mod sprint;
pub mod window;
