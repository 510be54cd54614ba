//! Line-oriented prompts over any reader/writer pair.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::SessionError;

/// Lines printed to push old output off screen.
const CLEAR_LINES: usize = 50;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), SessionError> {
        write!(self.output, "{}", "\n".repeat(CLEAR_LINES))?;
        Ok(())
    }

    /// Shows `label` and reads one line, without its line terminator.
    /// Inner whitespace and leading/trailing spaces are kept.
    pub fn prompt(&mut self, label: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Reads a menu choice. Unparseable input yields `None`.
    pub fn prompt_choice(&mut self, label: &str) -> Result<Option<u32>, SessionError> {
        let line = self.prompt(label)?;
        Ok(line.trim().parse().ok())
    }

    /// Reads a number, asking again until the input parses.
    pub fn prompt_number<T: FromStr>(&mut self, label: &str) -> Result<T, SessionError> {
        loop {
            let line = self.prompt(label)?;
            match line.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    tracing::debug!(input = %line, "rejected numeric input");
                    self.say("Please enter a number.")?;
                }
            }
        }
    }

    pub fn pause(&mut self) -> Result<(), SessionError> {
        self.prompt("\nPress Enter to continue...")?;
        Ok(())
    }
}
