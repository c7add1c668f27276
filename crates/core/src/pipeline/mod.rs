pub mod session_logger;
pub mod session_report;
pub mod transcription_session_use_case;
