//! Line-oriented console input with cancellation and bounded retries.
//!
//! Parsing raw text into semantic values happens here, not in the inventory crate.
//! A rejected value re-prompts at most `max_retries` times before the action gives
//! up and control returns to the menu.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::config::CliConfig;

/// Outcome of a single prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt<T> {
    Value(T),
    /// The user typed the cancel key.
    Cancelled,
    /// Too many invalid answers in a row.
    Exhausted,
    /// Input stream closed.
    Eof,
}

/// Digits only, no sign, no whitespace. Out-of-range values are rejected.
pub fn parse_unsigned(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Case-insensitive `Y`/`N`.
pub fn parse_yes_no(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("y") {
        Some(true)
    } else if text.eq_ignore_ascii_case("n") {
        Some(false)
    } else {
        None
    }
}

pub struct Console<R, W> {
    reader: R,
    writer: W,
    cancel_key: String,
    max_retries: u32,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W, config: &CliConfig) -> Self {
        Self {
            reader,
            writer,
            cancel_key: config.cancel_key.clone(),
            max_retries: config.max_retries.max(1),
        }
    }

    pub fn cancel_key(&self) -> &str {
        &self.cancel_key
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write one line of output.
    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.writer, "{}", text.as_ref())
    }

    /// Print `prompt` (no newline) and read the next line, trimmed.
    ///
    /// Returns `None` once the input is exhausted. Bytes that are not valid UTF-8
    /// are replaced, so the line reaches the caller's parser instead of failing.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Read free text. Only the cancel key is special.
    pub fn prompt_text(&mut self, prompt: &str) -> io::Result<Prompt<String>> {
        self.prompt_parsed(prompt, |text| Ok(text.to_string()))
    }

    /// Read a value, re-prompting while `parse` rejects it.
    ///
    /// `parse` returns the message to show for a rejected answer. After `max_retries`
    /// rejected answers the prompt gives up with [`Prompt::Exhausted`].
    pub fn prompt_parsed<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T, String>,
    ) -> io::Result<Prompt<T>> {
        for _ in 0..self.max_retries {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(Prompt::Eof);
            };
            if line.eq_ignore_ascii_case(&self.cancel_key) {
                self.say("\n> Action cancelled, going back to menu...")?;
                return Ok(Prompt::Cancelled);
            }
            match parse(&line) {
                Ok(value) => return Ok(Prompt::Value(value)),
                Err(message) => {
                    debug!(prompt = prompt.trim(), input = %line, "rejected input");
                    self.say(format!("\n> {message}"))?;
                }
            }
        }

        self.say("\n> Too many invalid attempts, going back to menu...")?;
        Ok(Prompt::Exhausted)
    }

    /// Y/N question.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<Prompt<bool>> {
        self.prompt_parsed(prompt, |text| {
            parse_yes_no(text).ok_or_else(|| "Invalid input, please enter 'Y' or 'N'.".to_string())
        })
    }
}
