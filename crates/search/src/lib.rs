//! Anagram-substring search utilities for anagrep.

mod engine;
mod matcher;
mod segment;
mod state;

pub use engine::{PatternEngine, canonical_key, find};
pub use matcher::{MatchResults, PatternMatch};
pub use segment::{Segment, segment};
pub use state::{SearchPhase, SearchSession};
