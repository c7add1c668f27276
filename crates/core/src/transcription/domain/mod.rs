pub mod clock;
pub mod line_source;
pub mod transcript_segment;
