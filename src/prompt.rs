//! Line-based question/answer channel with the operator.

use std::io::{BufRead, Write};

use crate::error::Result;

/// Owns the interactive input and output for one run.
///
/// Answers are trimmed and lower-cased. End of input reads as an empty answer,
/// and bytes that are not valid UTF-8 are replaced rather than rejected.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` and blocks until a line is read.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = Vec::new();
        let read = self.input.read_until(b'\n', &mut line)?;
        if read == 0 {
            log::debug!("Input closed while waiting for an answer");
        }

        Ok(String::from_utf8_lossy(&line).trim().to_lowercase())
    }

    /// Asks a yes/no question. Only `y` counts as yes.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(self.ask(question)? == "y")
    }

    /// Output shared with other reporters during the run.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Flushes pending output and releases both ends of the channel.
    pub fn close(mut self) -> Result<W> {
        self.output.flush()?;
        Ok(self.output)
    }
}
