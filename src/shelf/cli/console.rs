use shelf::error::Result;
use std::fmt::Display;
use std::io::{BufRead, Write};

/// Line-oriented prompt/answer channel.
///
/// Borrows its streams so the binary can hand in locked stdin/stdout and
/// tests can hand in byte buffers.
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Prints `prompt` and reads one line without its line ending.
    /// `None` once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
