use crate::util::is_affirmative;
use crossterm::style::Stylize;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Danger,
    Alert,
}

/// Line-oriented terminal I/O for the interactive menu. Generic over the
/// reader and writer so sessions can run against in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn say_toned(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        let painted = self.paint(text, tone);
        self.say(painted)
    }

    pub fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }
        match tone {
            Tone::Success => text.green().to_string(),
            Tone::Danger => text.red().to_string(),
            Tone::Alert => text.white().on_red().to_string(),
        }
    }

    /// Prints `message` and reads one line. Returns `None` at end of input.
    pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        self.say(message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Yes/no question; end of input counts as no.
    pub fn confirm(&mut self, message: &str) -> io::Result<bool> {
        Ok(self
            .prompt(message)?
            .map(|answer| is_affirmative(&answer))
            .unwrap_or(false))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::{Console, Tone};
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    #[test]
    fn prompt_strips_line_endings() {
        let mut console = console("Bob\r\nnext\n");
        assert_eq!(console.prompt("Name:").unwrap().as_deref(), Some("Bob"));
        assert_eq!(console.prompt("Again:").unwrap().as_deref(), Some("next"));
        assert_eq!(console.prompt("Done:").unwrap(), None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output, "Name:\nAgain:\nDone:\n");
    }

    #[test]
    fn confirm_treats_eof_as_no() {
        let mut console = console("yes\n");
        assert!(console.confirm("Sure?").unwrap());
        assert!(!console.confirm("Sure?").unwrap());
    }

    #[test]
    fn paint_is_plain_without_color() {
        let console = console("");
        assert_eq!(console.paint("Add", Tone::Success), "Add");
    }
}
