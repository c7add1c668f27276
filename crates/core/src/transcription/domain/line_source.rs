/// Domain interface for the lines a transcription session consumes.
///
/// Stands in for a speech recognizer: each line is one utterance.
pub trait LineSource: Send {
    /// Return the next line without its trailing newline, or `None` at end
    /// of input.
    fn next_line(&mut self) -> std::io::Result<Option<String>>;
}
