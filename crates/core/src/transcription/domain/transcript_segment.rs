use chrono::{DateTime, Local};
use serde::Serialize;

use crate::discovery::domain::keyword_extractor::KeywordExtractor;
use crate::shared::constants::TIMESTAMP_FORMAT;

/// One recorded line of the simulated transcript.
///
/// Keywords are extracted once, when the segment is created.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TranscriptSegment {
    text: String,
    timestamp: DateTime<Local>,
    keywords: Vec<String>,
}

impl TranscriptSegment {
    pub fn new(
        text: impl Into<String>,
        timestamp: DateTime<Local>,
        extractor: &KeywordExtractor,
    ) -> Self {
        let text = text.into();
        let keywords = extractor.extract(&text);
        Self {
            text,
            timestamp,
            keywords,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// `HH:MM:SS` capture time.
    pub fn clock_time(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Normalized form used to spot repeated lines.
    pub fn normalized_text(&self) -> String {
        normalize(&self.text)
    }
}

pub(crate) fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
