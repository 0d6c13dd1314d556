use serde::Serialize;

/// A located anagram occurrence: start offset plus the literal matched text.
///
/// `index` counts characters, not bytes, so it lines up with what a user
/// sees in the input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternMatch {
    pub index: usize,
    pub value: String,
}

impl PatternMatch {
    pub fn new(index: usize, value: impl Into<String>) -> Self {
        Self {
            index,
            value: value.into(),
        }
    }

    /// Length of the matched text in characters.
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// One past the last character position covered by this match.
    pub fn end(&self) -> usize {
        self.index + self.char_len()
    }
}

/// An ordered list of matches plus a current-selection cursor for the UI.
///
/// Matches are kept exactly as the scan produced them: ascending start
/// offset, duplicates at distinct offsets preserved, overlaps allowed.
#[derive(Debug, Clone, Default)]
pub struct MatchResults {
    matches: Vec<PatternMatch>,
    current_index: Option<usize>,
}

impl MatchResults {
    pub fn new() -> Self {
        Self {
            matches: Vec::new(),
            current_index: None,
        }
    }

    pub fn from_matches(matches: Vec<PatternMatch>) -> Self {
        let current_index = if matches.is_empty() { None } else { Some(0) };
        Self {
            matches,
            current_index,
        }
    }

    pub fn count(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn matches(&self) -> &[PatternMatch] {
        &self.matches
    }

    pub fn current(&self) -> Option<&PatternMatch> {
        self.current_index.and_then(|i| self.matches.get(i))
    }

    /// 1-based position of the current selection, for "3 of 7" displays.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current_index.map(|i| (i + 1, self.matches.len()))
    }

    pub fn selected(&self) -> Option<usize> {
        self.current_index
    }

    pub fn next(&mut self) -> Option<&PatternMatch> {
        if self.matches.is_empty() {
            return None;
        }
        let next_index = match self.current_index {
            Some(i) => (i + 1) % self.matches.len(),
            None => 0,
        };
        self.current_index = Some(next_index);
        self.matches.get(next_index)
    }

    pub fn previous(&mut self) -> Option<&PatternMatch> {
        if self.matches.is_empty() {
            return None;
        }
        let prev_index = match self.current_index {
            Some(i) => {
                if i == 0 {
                    self.matches.len() - 1
                } else {
                    i - 1
                }
            }
            None => self.matches.len() - 1,
        };
        self.current_index = Some(prev_index);
        self.matches.get(prev_index)
    }

    pub fn jump_to(&mut self, index: usize) -> Option<&PatternMatch> {
        if index < self.matches.len() {
            self.current_index = Some(index);
            self.matches.get(index)
        } else {
            None
        }
    }

    pub fn jump_to_first(&mut self) -> Option<&PatternMatch> {
        self.jump_to(0)
    }

    pub fn jump_to_last(&mut self) -> Option<&PatternMatch> {
        let index = self.matches.len().checked_sub(1)?;
        self.jump_to(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_end() {
        let m = PatternMatch::new(3, "ABDC");
        assert_eq!(m.char_len(), 4);
        assert_eq!(m.end(), 7);
    }

    #[test]
    fn test_match_end_multibyte() {
        let m = PatternMatch::new(2, "éé");
        assert_eq!(m.char_len(), 2);
        assert_eq!(m.end(), 4);
    }

    #[test]
    fn test_empty_results() {
        let results = MatchResults::new();
        assert!(results.is_empty());
        assert_eq!(results.count(), 0);
        assert!(results.current().is_none());
        assert!(results.position().is_none());
    }

    #[test]
    fn test_navigation_wraps() {
        let matches = vec![
            PatternMatch::new(0, "AB"),
            PatternMatch::new(4, "BA"),
            PatternMatch::new(9, "AB"),
        ];
        let mut results = MatchResults::from_matches(matches);

        assert_eq!(results.position(), Some((1, 3)));
        assert_eq!(results.current().unwrap().index, 0);

        results.next();
        assert_eq!(results.position(), Some((2, 3)));
        assert_eq!(results.current().unwrap().index, 4);

        results.next();
        results.next();
        assert_eq!(results.position(), Some((1, 3)));

        results.previous();
        assert_eq!(results.position(), Some((3, 3)));
    }

    #[test]
    fn test_jump_to() {
        let matches = vec![
            PatternMatch::new(0, "AB"),
            PatternMatch::new(4, "BA"),
            PatternMatch::new(9, "AB"),
        ];
        let mut results = MatchResults::from_matches(matches);

        results.jump_to_last();
        assert_eq!(results.current().unwrap().index, 9);

        results.jump_to_first();
        assert_eq!(results.current().unwrap().index, 0);

        assert!(results.jump_to(3).is_none());
        assert_eq!(results.current().unwrap().index, 0);
    }
}
