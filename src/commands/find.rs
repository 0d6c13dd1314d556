use anagrep_search::{SearchSession, Segment, segment};
use anyhow::Result;
use crossterm::style::Stylize;
use serde_json::json;

/// One-shot search: print the highlighted string, the match list, and a
/// count summary. Zero matches is a normal outcome, not an error.
pub fn run(text: &str, pattern: &str, json: bool) -> Result<()> {
    let mut session = SearchSession::new();
    session.set_text(text);
    session.set_pattern(pattern);
    session.search_now();

    let results = session.results();

    if json {
        let payload = json!({
            "pattern": pattern,
            "count": results.count(),
            "matches": results.matches(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    for seg in segment(text, results.matches()) {
        match seg {
            Segment::Plain(part) => print!("{part}"),
            Segment::Highlighted(part) => print!("{}", part.bold().reverse()),
        }
    }
    println!();
    println!();

    for m in results.matches() {
        println!("  Index: {:>5}  {}", m.index, m.value.as_str().bold());
    }
    if !results.is_empty() {
        println!();
    }
    println!("{}", summary(results.count(), pattern));

    Ok(())
}

pub fn summary(count: usize, pattern: &str) -> String {
    format!(
        "Found {} match{} for the pattern \"{}\".",
        count,
        if count == 1 { "" } else { "es" },
        pattern
    )
}
