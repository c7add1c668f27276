pub mod keyword_extractor;
pub mod link_generator;
pub mod transcript_summary;
pub mod trusted_sources;
