use std::io::{BufRead, Write};

use crate::transcription::domain::line_source::LineSource;

pub const DEFAULT_PROMPT: &str = "> ";

/// Reads lines from any buffered reader, optionally writing a prompt to
/// `prompt_out` before each read.
///
/// Used with stdin/stdout for interactive sessions and with files for
/// scripted ones.
pub struct BufReadLineSource<R, W> {
    reader: R,
    prompt_out: Option<W>,
    prompt: String,
}

impl<R: BufRead + Send, W: Write + Send> BufReadLineSource<R, W> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            prompt_out: None,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_prompt(mut self, out: W, prompt: impl Into<String>) -> Self {
        self.prompt_out = Some(out);
        self.prompt = prompt.into();
        self
    }
}

impl<R: BufRead + Send, W: Write + Send> LineSource for BufReadLineSource<R, W> {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        if let Some(ref mut out) = self.prompt_out {
            out.write_all(self.prompt.as_bytes())?;
            out.flush()?;
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn source(input: &str) -> BufReadLineSource<Cursor<Vec<u8>>, Vec<u8>> {
        BufReadLineSource::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn test_reads_lines_without_newlines() {
        let mut src = source("first line\nsecond line\r\n");
        assert_eq!(src.next_line().unwrap().as_deref(), Some("first line"));
        assert_eq!(src.next_line().unwrap().as_deref(), Some("second line"));
        assert_eq!(src.next_line().unwrap(), None);
    }

    #[test]
    fn test_blank_line_is_empty_string() {
        let mut src = source("\nafter");
        assert_eq!(src.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(src.next_line().unwrap().as_deref(), Some("after"));
    }

    #[test]
    fn test_keeps_inner_and_leading_whitespace() {
        let mut src = source("  spaced   out  \n");
        assert_eq!(src.next_line().unwrap().as_deref(), Some("  spaced   out  "));
    }

    #[test]
    fn test_empty_input_returns_none() {
        let mut src = source("");
        assert_eq!(src.next_line().unwrap(), None);
    }

    #[test]
    fn test_prompt_written_before_each_read() {
        let mut src = BufReadLineSource::new(Cursor::new(b"one\ntwo\n".to_vec()))
            .with_prompt(Vec::new(), "> ");
        src.next_line().unwrap();
        src.next_line().unwrap();
        src.next_line().unwrap();
        let prompts = src.prompt_out.take().unwrap();
        assert_eq!(String::from_utf8(prompts).unwrap(), "> > > ");
    }
}
