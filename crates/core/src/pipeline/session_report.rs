use std::collections::HashSet;
use std::fmt::{self, Write};

use serde::Serialize;

use crate::discovery::domain::transcript_summary::TranscriptSummary;
use crate::transcription::domain::transcript_segment::TranscriptSegment;

const RULE_WIDTH: usize = 40;

/// Width of the `[HH:MM:SS] ` prefix, used to indent wrapped lines.
const TIMESTAMP_PREFIX_WIDTH: usize = 11;

/// Everything a finished session produced: the transcript, the combined
/// keywords across all segments, and the search links built from them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionReport {
    pub segments: Vec<TranscriptSegment>,
    pub keywords: Vec<String>,
    pub links: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<TranscriptSummary>,
}

impl SessionReport {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Text report with each transcript line broken every `words_per_line`
    /// words. `None` keeps lines as typed.
    pub fn render_text(&self, words_per_line: Option<usize>) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_text(&mut out, words_per_line);
        out
    }

    fn write_text(&self, out: &mut impl Write, words_per_line: Option<usize>) -> fmt::Result {
        if self.segments.is_empty() {
            return writeln!(out, "\nNo transcription recorded.");
        }

        writeln!(out, "\nTranscript:")?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        let indent = format!("\n{}", " ".repeat(TIMESTAMP_PREFIX_WIDTH));
        for segment in &self.segments {
            let text = match words_per_line {
                Some(n) => wrap_words(segment.text(), n).replace('\n', &indent),
                None => segment.text().to_string(),
            };
            writeln!(out, "[{}] {text}", segment.clock_time())?;
        }

        if !self.keywords.is_empty() {
            writeln!(out, "\nKeywords found: {}", self.keywords.join(", "))?;
            writeln!(out, "\nRelevant Resources:")?;
            for link in &self.links {
                writeln!(out, "- {link}")?;
            }
        }

        if let Some(summary) = &self.summary {
            write_summary(out, summary)?;
        }
        Ok(())
    }
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_text(f, None)
    }
}

fn write_summary(out: &mut impl Write, summary: &TranscriptSummary) -> fmt::Result {
    match (&summary.start_time, &summary.end_time) {
        (Some(start), Some(end)) => writeln!(out, "\nSummary ({start} - {end}):")?,
        _ => writeln!(out, "\nSummary:")?,
    }
    if summary.is_empty() {
        return writeln!(out, "  (nothing notable)");
    }

    let sections: [(&str, &[String]); 7] = [
        ("Topics", &summary.topics),
        ("Decisions", &summary.decisions),
        ("Next steps", &summary.next_steps),
        ("Dates", &summary.dates),
        ("Key points", &summary.key_points),
        ("Action items", &summary.action_items),
        ("Deadlines", &summary.deadlines),
    ];
    for (title, items) in sections {
        if items.is_empty() {
            continue;
        }
        writeln!(out, "{title}:")?;
        for item in items {
            writeln!(out, "  - {item}")?;
        }
    }
    Ok(())
}

/// Merge per-segment keyword sets, keeping the first occurrence of each.
pub fn aggregate_keywords(segments: &[TranscriptSegment]) -> Vec<String> {
    let mut seen = HashSet::new();
    segments
        .iter()
        .flat_map(|s| s.keywords())
        .filter(|k| seen.insert(k.as_str()))
        .cloned()
        .collect()
}

/// Re-flow `text` so every line holds at most `words_per_line` words.
pub fn wrap_words(text: &str, words_per_line: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    words
        .chunks(words_per_line.max(1))
        .map(|line| line.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}
