use crate::matcher::PatternMatch;

/// A contiguous run of the original text, tagged for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Highlighted(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Highlighted(text) => text,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self, Segment::Highlighted(_))
    }
}

/// Partition `text` into alternating plain and highlighted runs.
///
/// Matches are stable-sorted by start offset and consumed left to right
/// with a cursor: the gap before each match becomes a Plain segment, the
/// match's captured value becomes a Highlighted segment, and whatever
/// trails the last match becomes a final Plain segment. Offsets are in
/// character units.
///
/// Overlapping matches are emitted as-is: no merging and no dropping, so
/// a match starting inside an already-consumed span still produces a
/// Highlighted segment and re-positions the cursor from its own end. In
/// that case the concatenated output no longer reproduces `text`. This
/// mirrors the reference renderer; callers that need a clean partition
/// must pass non-overlapping matches.
pub fn segment(text: &str, matches: &[PatternMatch]) -> Vec<Segment> {
    let chars: Vec<char> = text.chars().collect();
    if matches.is_empty() || chars.is_empty() {
        return vec![Segment::Plain(text.to_string())];
    }

    let mut sorted: Vec<&PatternMatch> = matches.iter().collect();
    sorted.sort_by_key(|m| m.index);

    let mut segments = Vec::new();
    let mut last_index = 0usize;

    for m in sorted {
        if m.index > last_index {
            segments.push(Segment::Plain(slice_chars(&chars, last_index, m.index)));
        }
        segments.push(Segment::Highlighted(m.value.clone()));
        last_index = m.end();
    }

    if last_index < chars.len() {
        segments.push(Segment::Plain(slice_chars(&chars, last_index, chars.len())));
    }

    segments
}

// Clamps out-of-range bounds instead of panicking, so arbitrary match
// lists stay total.
fn slice_chars(chars: &[char], start: usize, end: usize) -> String {
    let end = end.min(chars.len());
    let start = start.min(end);
    chars[start..end].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::find;

    fn concat(segments: &[Segment]) -> String {
        segments.iter().map(Segment::text).collect()
    }

    #[test]
    fn test_single_match_in_middle() {
        let segments = segment("ABCDE", &[PatternMatch::new(1, "BC")]);
        assert_eq!(
            segments,
            vec![
                Segment::Plain("A".to_string()),
                Segment::Highlighted("BC".to_string()),
                Segment::Plain("DE".to_string()),
            ]
        );
        assert_eq!(concat(&segments), "ABCDE");
    }

    #[test]
    fn test_no_matches() {
        let segments = segment("XY", &[]);
        assert_eq!(segments, vec![Segment::Plain("XY".to_string())]);
    }

    #[test]
    fn test_empty_text() {
        let segments = segment("", &[]);
        assert_eq!(segments, vec![Segment::Plain(String::new())]);
    }

    #[test]
    fn test_match_at_start_and_end() {
        let segments = segment(
            "ABXBA",
            &[PatternMatch::new(0, "AB"), PatternMatch::new(3, "BA")],
        );
        assert_eq!(
            segments,
            vec![
                Segment::Highlighted("AB".to_string()),
                Segment::Plain("X".to_string()),
                Segment::Highlighted("BA".to_string()),
            ]
        );
        assert_eq!(concat(&segments), "ABXBA");
    }

    #[test]
    fn test_adjacent_matches_no_plain_between() {
        let segments = segment(
            "ABBA",
            &[PatternMatch::new(0, "AB"), PatternMatch::new(2, "BA")],
        );
        assert_eq!(
            segments,
            vec![
                Segment::Highlighted("AB".to_string()),
                Segment::Highlighted("BA".to_string()),
            ]
        );
        assert_eq!(concat(&segments), "ABBA");
    }

    #[test]
    fn test_unsorted_input_is_sorted_first() {
        let segments = segment(
            "ABXBA",
            &[PatternMatch::new(3, "BA"), PatternMatch::new(0, "AB")],
        );
        assert_eq!(concat(&segments), "ABXBA");
        assert!(segments[0].is_highlighted());
    }

    #[test]
    fn test_overlapping_matches_keep_reference_behavior() {
        // "BAB" at 0 and "ABA" at 1 overlap. The second match is neither
        // merged nor dropped; its value is emitted and the cursor moves to
        // its end, so the concatenation diverges from the input.
        let segments = segment(
            "BABAX",
            &[PatternMatch::new(0, "BAB"), PatternMatch::new(1, "ABA")],
        );
        assert_eq!(
            segments,
            vec![
                Segment::Highlighted("BAB".to_string()),
                Segment::Highlighted("ABA".to_string()),
                Segment::Plain("X".to_string()),
            ]
        );
        assert_eq!(concat(&segments), "BABABAX");
    }

    #[test]
    fn test_multibyte_offsets() {
        let segments = segment("xéay", &[PatternMatch::new(1, "éa")]);
        assert_eq!(
            segments,
            vec![
                Segment::Plain("x".to_string()),
                Segment::Highlighted("éa".to_string()),
                Segment::Plain("y".to_string()),
            ]
        );
        assert_eq!(concat(&segments), "xéay");
    }

    #[test]
    fn test_round_trip_with_find() {
        // find's matches for this input happen to be non-overlapping, so
        // the segment concatenation reproduces the text exactly.
        let text = "ABDCKDHJABDCXXDCBA";
        let matches = find(text, "ABCD");
        assert_eq!(matches.len(), 3);
        let segments = segment(text, &matches);
        assert_eq!(concat(&segments), text);
    }
}
