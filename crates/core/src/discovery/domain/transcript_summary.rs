//! Offline, pattern-based summary of a finished transcript.
//!
//! Two views are produced from the same segments:
//! - a whole-session digest (topics, decisions, next steps, dates) over the
//!   deduplicated transcript;
//! - a recent-window digest (key points, action items, deadlines) over the
//!   segments captured in the last few minutes before the final segment.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::Duration;
use regex::Regex;
use serde::Serialize;

use crate::transcription::domain::transcript_segment::{normalize, TranscriptSegment};

pub const MAX_TOPICS: usize = 5;
pub const MIN_TOPIC_CHARS: usize = 20;
pub const MAX_KEY_POINTS: usize = 3;
pub const MAX_ACTION_ITEMS: usize = 4;
pub const MAX_DEADLINES: usize = 3;
pub const RECENT_WINDOW_MINUTES: i64 = 3;

const KEY_POINT_MARKERS: &[&str] = &["important", "key", "main", "critical", "essential"];

const MONTHS: &str =
    "january|february|march|april|may|june|july|august|september|october|november|december";

static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid sentence pattern"));

static DECISION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:decided|agreed|concluded|determined) (?:to|that) [^.!?]+[.!?]")
        .expect("valid decision pattern")
});

static NEXT_STEP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:need to|should|will|must) [^.!?]+[.!?]").expect("valid next-step pattern")
});

static FULL_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:{MONTHS})\s+\d{{1,2}}(?:st|nd|rd|th)?\s*,?\s*\d{{4}}\b"
    ))
    .expect("valid date pattern")
});

static ACTION_ITEMS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)(?:need to|should|must|will|going to) ([^.!?]+)").expect("valid pattern"),
        Regex::new(r"(?i)(?:action item|task|todo):? ([^.!?]+)").expect("valid pattern"),
        Regex::new(r"(?i)(?:assigned to|responsible for) ([^.!?]+)").expect("valid pattern"),
    ]
});

static DEADLINES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)by (?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)[^.!?]*")
            .expect("valid pattern"),
        Regex::new(r"(?i)due (?:on|by) [^.!?]*").expect("valid pattern"),
        Regex::new(r"(?i)deadline:? [^.!?]*").expect("valid pattern"),
        Regex::new(&format!(
            r"(?i)(?:{MONTHS}) \d{{1,2}}(?:st|nd|rd|th)?(?:,? \d{{4}})?"
        ))
        .expect("valid pattern"),
    ]
});

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TranscriptSummary {
    /// `HH:MM:SS` of the first and last segment.
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub topics: Vec<String>,
    pub decisions: Vec<String>,
    pub next_steps: Vec<String>,
    pub dates: Vec<String>,
    pub key_points: Vec<String>,
    pub action_items: Vec<String>,
    pub deadlines: Vec<String>,
}

impl TranscriptSummary {
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
            && self.decisions.is_empty()
            && self.next_steps.is_empty()
            && self.dates.is_empty()
            && self.key_points.is_empty()
            && self.action_items.is_empty()
            && self.deadlines.is_empty()
    }
}

pub fn summarize(segments: &[TranscriptSegment]) -> TranscriptSummary {
    let Some(last) = segments.last() else {
        return TranscriptSummary::default();
    };

    let full_text = joined_text(unique_segments(segments));
    let cutoff = last.timestamp() - Duration::minutes(RECENT_WINDOW_MINUTES);
    let recent_text = joined_text(segments.iter().filter(|s| s.timestamp() > cutoff));

    TranscriptSummary {
        start_time: Some(segments[0].clock_time()),
        end_time: Some(last.clock_time()),
        topics: extract_topics(&full_text),
        decisions: all_matches(&DECISION, &full_text),
        next_steps: all_matches(&NEXT_STEP, &full_text),
        dates: all_matches(&FULL_DATE, &full_text),
        key_points: extract_key_points(&recent_text),
        action_items: extract_action_items(&recent_text),
        deadlines: extract_deadlines(&recent_text),
    }
}

fn unique_segments(segments: &[TranscriptSegment]) -> impl Iterator<Item = &TranscriptSegment> {
    let mut seen = HashSet::new();
    segments
        .iter()
        .filter(move |s| seen.insert(normalize(s.text())))
}

fn joined_text<'a>(segments: impl Iterator<Item = &'a TranscriptSegment>) -> String {
    segments
        .map(TranscriptSegment::text)
        .collect::<Vec<_>>()
        .join(" ")
}

fn all_matches(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

fn extract_topics(text: &str) -> Vec<String> {
    SENTENCE_BREAK
        .split(text)
        .filter(|s| s.chars().count() > MIN_TOPIC_CHARS)
        .take(MAX_TOPICS)
        .map(|s| s.trim().to_string())
        .collect()
}

fn extract_key_points(text: &str) -> Vec<String> {
    SENTENCE_BREAK
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .filter(|s| {
            let lower = s.to_lowercase();
            KEY_POINT_MARKERS.iter().any(|m| lower.contains(m))
        })
        .take(MAX_KEY_POINTS)
        .map(|s| s.trim().to_string())
        .collect()
}

fn extract_action_items(text: &str) -> Vec<String> {
    let captures = ACTION_ITEMS.iter().flat_map(|pattern| {
        pattern
            .captures_iter(text)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
    });
    first_unique(captures, MAX_ACTION_ITEMS)
}

fn extract_deadlines(text: &str) -> Vec<String> {
    let matches = DEADLINES
        .iter()
        .flat_map(|pattern| pattern.find_iter(text).map(|m| m.as_str().trim().to_string()));
    first_unique(matches, MAX_DEADLINES)
}

fn first_unique(items: impl Iterator<Item = String>, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .filter(|item| seen.insert(item.clone()))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::domain::keyword_extractor::KeywordExtractor;
    use chrono::{DateTime, Local, TimeZone};

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 1, h, m, s)
            .single()
            .unwrap()
    }

    fn segment(text: &str, ts: DateTime<Local>) -> TranscriptSegment {
        TranscriptSegment::new(text, ts, &KeywordExtractor::default())
    }

    #[test]
    fn test_empty_transcript() {
        let summary = summarize(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.start_time, None);
    }

    #[test]
    fn test_start_and_end_time() {
        let summary = summarize(&[segment("hello", at(9, 0, 0)), segment("bye", at(9, 4, 30))]);
        assert_eq!(summary.start_time.as_deref(), Some("09:00:00"));
        assert_eq!(summary.end_time.as_deref(), Some("09:04:30"));
    }

    #[test]
    fn test_topics_are_long_sentences() {
        let summary = summarize(&[segment(
            "Short one. We reviewed the quarterly roadmap today! Ok? The migration plan looks solid",
            at(9, 0, 0),
        )]);
        assert_eq!(
            summary.topics,
            vec![
                "We reviewed the quarterly roadmap today",
                "The migration plan looks solid",
            ]
        );
    }

    #[test]
    fn test_topics_capped() {
        let text = (0..8)
            .map(|i| format!("this sentence number {i} is long enough"))
            .collect::<Vec<_>>()
            .join(". ");
        let summary = summarize(&[segment(&text, at(9, 0, 0))]);
        assert_eq!(summary.topics.len(), MAX_TOPICS);
    }

    #[test]
    fn test_decisions_and_next_steps() {
        let summary = summarize(&[segment(
            "We decided to ship on Friday. Someone must update the changelog.",
            at(9, 0, 0),
        )]);
        assert_eq!(summary.decisions, vec!["decided to ship on Friday."]);
        assert_eq!(summary.next_steps, vec!["must update the changelog."]);
    }

    #[test]
    fn test_dates() {
        let summary = summarize(&[segment(
            "The release is planned for March 3rd, 2025 and review on April 10 2025",
            at(9, 0, 0),
        )]);
        assert_eq!(summary.dates, vec!["March 3rd, 2025", "April 10 2025"]);
    }

    #[test]
    fn test_duplicate_lines_counted_once_in_whole_session_view() {
        let summary = summarize(&[
            segment("We agreed that tests come first.", at(9, 0, 0)),
            segment("we agreed that tests come first.", at(9, 0, 5)),
        ]);
        assert_eq!(summary.decisions.len(), 1);
    }

    #[test]
    fn test_key_points_case_insensitive_and_capped() {
        let summary = summarize(&[segment(
            "This is IMPORTANT. Nothing here. The main idea. A critical bug. Essential reading.",
            at(9, 0, 0),
        )]);
        assert_eq!(
            summary.key_points,
            vec!["This is IMPORTANT", "The main idea", "A critical bug"]
        );
    }

    #[test]
    fn test_action_items_deduplicated_in_pattern_order() {
        let summary = summarize(&[segment(
            "We need to fix the build. Task: fix the build. Alice is responsible for docs.",
            at(9, 0, 0),
        )]);
        assert_eq!(summary.action_items, vec!["fix the build", "docs"]);
    }

    #[test]
    fn test_deadlines() {
        let summary = summarize(&[segment(
            "Please finish by Friday afternoon. The report is due on the 5th. Deadline: next sprint.",
            at(9, 0, 0),
        )]);
        assert_eq!(
            summary.deadlines,
            vec![
                "by Friday afternoon",
                "due on the 5th",
                "Deadline: next sprint",
            ]
        );
    }

    #[test]
    fn test_recent_window_excludes_old_segments() {
        let summary = summarize(&[
            segment("The key risk is latency.", at(9, 0, 0)),
            segment("Another key risk is cost.", at(9, 10, 0)),
        ]);
        assert_eq!(summary.key_points, vec!["Another key risk is cost"]);
        assert_eq!(summary.topics.len(), 2);
    }
}
