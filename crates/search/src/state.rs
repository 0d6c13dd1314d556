use crate::engine::PatternEngine;
use crate::matcher::MatchResults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
    Results,
}

/// Manages the search session lifecycle.
///
/// The session tracks the current inputs, which phase the UI is in, and
/// the latest completed results. Searches run elsewhere (a worker thread
/// in the TUI); the session hands out a generation number at start and
/// only accepts a completion carrying the current generation, so the most
/// recently started search always wins.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    engine: PatternEngine,
    text: String,
    phase: SearchPhase,
    results: MatchResults,
    generation: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn pattern(&self) -> &str {
        self.engine.pattern()
    }

    pub fn set_pattern(&mut self, pattern: &str) {
        self.engine.set_pattern(pattern);
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_searching(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    pub fn has_searched(&self) -> bool {
        self.phase == SearchPhase::Results
    }

    /// Whether the trigger action is currently allowed: both inputs
    /// non-empty and no search in flight.
    pub fn can_search(&self) -> bool {
        !self.text.is_empty() && self.engine.has_pattern() && !self.is_searching()
    }

    /// Move to the Searching phase and return the generation the eventual
    /// completion must carry. Prior results are dropped immediately, as
    /// in the original UI. Returns None when either input is empty.
    pub fn begin_search(&mut self) -> Option<u64> {
        if self.text.is_empty() || !self.engine.has_pattern() {
            return None;
        }
        self.generation += 1;
        self.phase = SearchPhase::Searching;
        self.results = MatchResults::new();
        Some(self.generation)
    }

    /// Install completed results. A completion for a superseded
    /// generation is discarded and the return value is false.
    pub fn complete(&mut self, generation: u64, results: MatchResults) -> bool {
        if generation != self.generation {
            log::debug!("discarding stale search completion (generation {generation})");
            return false;
        }
        self.results = results;
        self.phase = SearchPhase::Results;
        true
    }

    /// Run the search synchronously. The CLI path has no repaint to wait
    /// for, so it skips the deferred hand-off.
    pub fn search_now(&mut self) {
        if let Some(generation) = self.begin_search() {
            let results = self.engine.scan(&self.text);
            self.complete(generation, results);
        }
    }

    pub fn results(&self) -> &MatchResults {
        &self.results
    }

    pub fn results_mut(&mut self) -> &mut MatchResults {
        &mut self.results
    }

    /// Reset to Idle and drop any results.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.phase = SearchPhase::Idle;
        self.results = MatchResults::new();
    }

    pub fn next_match(&mut self) {
        self.results.next();
    }

    pub fn previous_match(&mut self) {
        self.results.previous();
    }
}
