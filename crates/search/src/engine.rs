use crate::matcher::{MatchResults, PatternMatch};

/// Canonical form of a string for multiset comparison: its characters
/// sorted by code point.
pub fn canonical_key(s: &str) -> Vec<char> {
    let mut key: Vec<char> = s.chars().collect();
    key.sort_unstable();
    key
}

/// Scan `text` for every window whose characters are a permutation of
/// `pattern`.
///
/// The window width is fixed at the pattern's character length and steps
/// one character at a time, so overlapping occurrences are all reported.
/// An empty pattern, empty text, or a pattern longer than the text yield
/// an empty list rather than an error. Comparison is exact character
/// equality with no case folding.
pub fn find(text: &str, pattern: &str) -> Vec<PatternMatch> {
    let pattern_key = canonical_key(pattern);
    find_with_key(text, &pattern_key)
}

fn find_with_key(text: &str, pattern_key: &[char]) -> Vec<PatternMatch> {
    let pattern_len = pattern_key.len();
    if pattern_len == 0 {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    if pattern_len > chars.len() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    for i in 0..=chars.len() - pattern_len {
        let window = &chars[i..i + pattern_len];
        let mut window_key = window.to_vec();
        window_key.sort_unstable();
        if window_key == pattern_key {
            matches.push(PatternMatch::new(i, window.iter().collect::<String>()));
        }
    }

    log::debug!(
        "scanned {} windows, found {} matches",
        chars.len() + 1 - pattern_len,
        matches.len()
    );
    matches
}

/// Holds a pattern and its precomputed canonical key so repeated scans
/// don't re-sort the pattern.
#[derive(Debug, Clone, Default)]
pub struct PatternEngine {
    pattern: String,
    key: Vec<char>,
}

impl PatternEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pattern(&mut self, pattern: &str) {
        if pattern == self.pattern {
            return;
        }
        self.pattern = pattern.to_string();
        self.key = canonical_key(pattern);
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn has_pattern(&self) -> bool {
        !self.key.is_empty()
    }

    pub fn scan(&self, text: &str) -> MatchResults {
        MatchResults::from_matches(find_with_key(text, &self.key))
    }
}
