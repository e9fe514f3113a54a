//! Simultaneous fixed-substring replacement.
//!
//! All registered search strings are matched in one left-to-right pass over
//! the input. The leftmost match wins; when several patterns could match at
//! the same position the tie resolves by pattern precedence, which is the
//! rule map's key order: implementation-defined, but deterministic.

use std::collections::BTreeMap;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};

/// Multi-pattern string replacer backed by a compiled automaton.
///
/// Rules are keyed by their search string; re-adding a search string
/// overwrites its replacement. The automaton is rebuilt lazily, at most
/// once per batch of additions before the next [`execute`](Self::execute).
pub struct Replacer {
    rules: BTreeMap<String, String>,
    compiled: Option<Compiled>,
    elongating: bool,
}

struct Compiled {
    automaton: AhoCorasick,
    replacements: Vec<String>,
}

impl Default for Replacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Replacer {
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
            compiled: None,
            elongating: false,
        }
    }

    /// Registers a rule, overwriting any rule with the same search string.
    ///
    /// Chainable, so rule sets read as one expression.
    pub fn add(&mut self, search: impl Into<String>, replace: impl Into<String>) -> &mut Self {
        let search = search.into();
        let replace = replace.into();
        if replace.len() > search.len() {
            self.elongating = true;
        }
        self.rules.insert(search, replace);
        self.compiled = None;
        self
    }

    /// Whether any rule, past or present, could grow the output beyond the
    /// input length. The flag never clears once set.
    pub fn is_elongating(&self) -> bool {
        self.elongating
    }

    /// Replaces every registered search string in `text` in a single pass.
    ///
    /// Gaps between matches are copied verbatim; with no rules or no
    /// matches the text comes back unchanged. The output buffer is sized
    /// to roughly double the input for elongating rule sets and to the
    /// input length otherwise, keeping reallocation out of the common case.
    pub fn execute(&mut self, text: &str) -> String {
        if self.rules.is_empty() {
            return text.to_owned();
        }
        let rules = &self.rules;
        let compiled = self.compiled.get_or_insert_with(|| Compiled::build(rules));

        let capacity = if self.elongating {
            text.len() * 2
        } else {
            text.len()
        };
        let mut output = String::with_capacity(capacity);
        let mut tail = 0;
        for found in compiled.automaton.find_iter(text) {
            output.push_str(&text[tail..found.start()]);
            output.push_str(&compiled.replacements[found.pattern().as_usize()]);
            tail = found.end();
        }
        output.push_str(&text[tail..]);
        output
    }
}

impl Compiled {
    fn build(rules: &BTreeMap<String, String>) -> Self {
        let patterns: Vec<&str> = rules.keys().map(String::as_str).collect();
        let automaton = AhoCorasickBuilder::new()
            .match_kind(MatchKind::LeftmostFirst)
            .build(&patterns)
            .unwrap_or_else(|err| panic!("replacement automaton rebuild failed: {err}"));
        let replacements = rules.values().cloned().collect();
        Self {
            automaton,
            replacements,
        }
    }
}
