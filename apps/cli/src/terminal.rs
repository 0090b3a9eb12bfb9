//! Line-oriented terminal input and output.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};

/// Prompted line reader paired with an output sink.
pub struct Console<I, W> {
    input: I,
    output: W,
}

impl<I: BufRead, W: Write> Console<I, W> {
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed line.
    ///
    /// Returns `None` once input is exhausted, after moving to a fresh line.
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn read_line(&mut self, prompt: impl Display) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }

    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    pub fn clear_screen(&mut self) -> io::Result<()> {
        crossterm::queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        self.output.flush()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// "1 day" / "3 days".
pub fn days(count: usize) -> String {
    if count == 1 {
        "1 day".to_string()
    } else {
        format!("{count} days")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_line_trims() {
        let mut console = Console::new(&b"  hello world  \nnext\n"[..], Vec::new());
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("hello world"));
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("next"));
        assert_eq!(console.read_line("> ").unwrap(), None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "> > > \n");
    }

    #[test]
    fn test_read_line_tolerates_invalid_utf8() {
        let mut console = Console::new(&b"caf\xe9 notes about this word\n"[..], Vec::new());
        let line = console.read_line("> ").unwrap().unwrap();
        assert_eq!(line, "caf\u{fffd} notes about this word");
        assert_eq!(line.split_whitespace().count(), 5);
    }

    #[test]
    fn test_days() {
        assert_eq!(days(0), "0 days");
        assert_eq!(days(1), "1 day");
        assert_eq!(days(12), "12 days");
    }
}
