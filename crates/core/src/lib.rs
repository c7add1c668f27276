//! Keyword discovery for simulated transcription sessions.
//!
//! Typed lines stand in for recognized speech. Each line is reduced to a
//! handful of keywords, and the keywords of a whole session are turned into
//! search links against a list of trusted documentation sites.

pub mod discovery;
pub mod pipeline;
pub mod shared;
pub mod transcription;
