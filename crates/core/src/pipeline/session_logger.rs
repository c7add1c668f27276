/// Cross-cutting logger for transcription session events.
///
/// Keeps the session use case free of any particular output mechanism so
/// the CLI, tests and JSON mode can each observe it differently.
pub trait SessionLogger: Send {
    /// A line was recorded as segment number `index` (1-based).
    fn segment_recorded(&mut self, index: usize, keyword_count: usize);

    /// A line was dropped because it repeated an earlier one.
    fn duplicate_skipped(&mut self, text: &str);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-session summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
pub struct NullSessionLogger;

impl SessionLogger for NullSessionLogger {
    fn segment_recorded(&mut self, _index: usize, _keyword_count: usize) {}
    fn duplicate_skipped(&mut self, _text: &str) {}
    fn info(&mut self, _message: &str) {}
}

/// Forwards events to the `log` facade and counts them for a summary
/// line at the end of the session.
#[derive(Debug, Default)]
pub struct LogSessionLogger {
    segments: usize,
    keywords: usize,
    duplicates: usize,
}

impl LogSessionLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the summary line, or `None` if nothing was recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.segments == 0 && self.duplicates == 0 {
            return None;
        }
        let mut line = format!(
            "Session summary: {} segments, {} keywords extracted",
            self.segments, self.keywords
        );
        if self.duplicates > 0 {
            line.push_str(&format!(", {} duplicates skipped", self.duplicates));
        }
        Some(line)
    }
}

impl SessionLogger for LogSessionLogger {
    fn segment_recorded(&mut self, index: usize, keyword_count: usize) {
        self.segments += 1;
        self.keywords += keyword_count;
        log::debug!("Segment {index}: {keyword_count} keywords");
    }

    fn duplicate_skipped(&mut self, text: &str) {
        self.duplicates += 1;
        log::debug!("Skipping repeated line: {text}");
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("{text}");
        }
    }
}
