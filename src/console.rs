// 💬 Console I/O
// Line-oriented prompts over any BufRead / Write pair

use anyhow::Result;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

/// Prompt/print helper shared by the menu and every interactive command.
///
/// Generic so tests can script input from a byte slice and capture output.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Console::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Print `message` (no newline) and read one line.
    ///
    /// Returns the line without its trailing newline, or `None` once input
    /// is exhausted.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Print one line
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_reads_lines_then_none() {
        let mut console = Console::new("first\r\nsecond\n".as_bytes(), Vec::new());

        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("first"));
        assert_eq!(console.prompt("> ").unwrap().as_deref(), Some("second"));
        assert_eq!(console.prompt("> ").unwrap(), None);

        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "> > > ");
    }

    #[test]
    fn test_prompt_keeps_inner_whitespace() {
        let mut console = Console::new("  Blue Widget \n".as_bytes(), Vec::new());
        assert_eq!(
            console.prompt("").unwrap().as_deref(),
            Some("  Blue Widget ")
        );
    }

    #[test]
    fn test_say_appends_newline() {
        let mut console = Console::new("".as_bytes(), Vec::new());
        console.say("hello").unwrap();
        assert_eq!(console.output(), b"hello\n");
    }
}
