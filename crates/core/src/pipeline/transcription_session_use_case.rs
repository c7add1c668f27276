use std::collections::HashSet;
use std::io::Write;

use thiserror::Error;

use crate::discovery::domain::keyword_extractor::KeywordExtractor;
use crate::discovery::domain::link_generator::LinkGenerator;
use crate::discovery::domain::transcript_summary::summarize;
use crate::pipeline::session_logger::SessionLogger;
use crate::pipeline::session_report::{aggregate_keywords, SessionReport};
use crate::transcription::domain::clock::Clock;
use crate::transcription::domain::line_source::LineSource;
use crate::transcription::domain::transcript_segment::{normalize, TranscriptSegment};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("failed to read input line: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to write session output: {0}")]
    Write(#[source] std::io::Error),
}

/// Runs one simulated transcription session.
///
/// Lines are pulled from the source until an empty line or end of input.
/// Each line is stamped, keyword-extracted and acknowledged on `ack_out`.
/// Keywords from all segments are merged and turned into links once, at
/// the end.
pub struct TranscriptionSessionUseCase {
    source: Box<dyn LineSource>,
    clock: Box<dyn Clock>,
    extractor: KeywordExtractor,
    generator: LinkGenerator,
    logger: Box<dyn SessionLogger>,
    skip_duplicates: bool,
    include_summary: bool,
}

impl TranscriptionSessionUseCase {
    pub fn new(
        source: Box<dyn LineSource>,
        clock: Box<dyn Clock>,
        extractor: KeywordExtractor,
        generator: LinkGenerator,
        logger: Box<dyn SessionLogger>,
    ) -> Self {
        Self {
            source,
            clock,
            extractor,
            generator,
            logger,
            skip_duplicates: false,
            include_summary: false,
        }
    }

    /// Drop lines whose trimmed, lowercased text was already recorded.
    pub fn with_skip_duplicates(mut self, skip: bool) -> Self {
        self.skip_duplicates = skip;
        self
    }

    /// Attach a pattern-based summary of the transcript to the report.
    pub fn with_summary(mut self, include: bool) -> Self {
        self.include_summary = include;
        self
    }

    pub fn run(&mut self, ack_out: &mut dyn Write) -> Result<SessionReport, SessionError> {
        let segments = self.record(ack_out)?;

        let keywords = aggregate_keywords(&segments);
        let links = self.generator.generate(&keywords);
        if !keywords.is_empty() {
            self.logger.info(&format!(
                "Discovered {} keywords, built {} links",
                keywords.len(),
                links.len()
            ));
        }
        let summary = (self.include_summary && !segments.is_empty()).then(|| summarize(&segments));
        self.logger.summary();

        Ok(SessionReport {
            segments,
            keywords,
            links,
            summary,
        })
    }

    fn record(&mut self, ack_out: &mut dyn Write) -> Result<Vec<TranscriptSegment>, SessionError> {
        let mut segments = Vec::new();
        let mut seen = HashSet::new();

        while let Some(line) = self.source.next_line().map_err(SessionError::Read)? {
            if line.is_empty() {
                break;
            }

            if self.skip_duplicates && !seen.insert(normalize(&line)) {
                self.logger.duplicate_skipped(&line);
                continue;
            }

            let segment = TranscriptSegment::new(line, self.clock.now(), &self.extractor);
            writeln!(ack_out, "[{}] Recorded", segment.clock_time()).map_err(SessionError::Write)?;
            let keyword_count = segment.keywords().len();
            segments.push(segment);
            self.logger.segment_recorded(segments.len(), keyword_count);
        }

        Ok(segments)
    }
}
