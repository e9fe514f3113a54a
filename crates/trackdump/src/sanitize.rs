//! Ready-made replacement rules for legacy export rows.

use trackdump_replace::Replacer;

/// Rules that repair measurement rows produced by older dashboard exports,
/// where composite keys leaked through as Python tuples and objects kept a
/// trailing comma before the closing brace.
pub fn measurement_row_fixups() -> Replacer {
    let mut replacer = Replacer::new();
    replacer.add("(\"", "[\"").add("\")", "\"]").add(", }", "}");
    replacer
}
