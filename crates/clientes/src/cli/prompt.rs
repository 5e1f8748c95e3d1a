//! Line-based prompting.
//!
//! Every prompt is written without a newline, then one line is read and trimmed.
//! [`Prompter::ask`] keeps asking until a [`FieldRule`] accepts the value. When the
//! rule's predicate refuses a value the operator is asked whether to try again;
//! typing `0` there gives up and yields [`Prompted::Cancelled`]. A `0` typed as the
//! field value itself is just a value.
//!
//! Bytes that are not UTF-8 never reach a rule: the line is refused and asked for
//! again.
//!
//! End of input also yields `Cancelled`, and [`Prompter::is_closed`] reports it so
//! the session can stop instead of asking forever.

use super::render::render_message;
use clientesapp::api::CmdMessage;
use clientesapp::validation::FieldRule;
use std::io::{self, BufRead, Write};

pub const RETRY_PROMPT: &str = "Press Enter to try again or type 0 to return to the menu: ";
pub const CANCEL_CHOICE: &str = "0";
pub const INVALID_ENCODING: &str = "Input is not valid UTF-8. Try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted<T> {
    Value(T),
    Cancelled,
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            closed: false,
        }
    }

    /// Shows `prompt` and reads one trimmed line; `None` once input is exhausted.
    ///
    /// A line that is not valid UTF-8 is refused and the prompt is shown again.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            if self.closed {
                return Ok(None);
            }
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut raw = Vec::new();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                self.closed = true;
                writeln!(self.output)?;
                return Ok(None);
            }
            match String::from_utf8(raw) {
                Ok(line) => return Ok(Some(line.trim().to_string())),
                Err(_) => self.say(&CmdMessage::error(INVALID_ENCODING))?,
            }
        }
    }

    pub fn ask(&mut self, rule: &FieldRule<'_>) -> io::Result<Prompted<String>> {
        loop {
            let Some(value) = self.read_line(&rule.prompt)? else {
                return Ok(Prompted::Cancelled);
            };
            let Err(rejection) = rule.check(&value) else {
                return Ok(Prompted::Value(value));
            };

            self.say(&CmdMessage::error(rejection.to_string()))?;
            if rejection.offers_opt_out() && !self.offer_retry()? {
                return Ok(Prompted::Cancelled);
            }
        }
    }

    /// Free text; empty is a valid answer.
    pub fn ask_optional(&mut self, prompt: &str) -> io::Result<Prompted<String>> {
        Ok(match self.read_line(prompt)? {
            Some(value) => Prompted::Value(value),
            None => Prompted::Cancelled,
        })
    }

    /// `true` to try again, `false` when the operator typed `0` or input ended.
    pub fn offer_retry(&mut self) -> io::Result<bool> {
        Ok(match self.read_line(RETRY_PROMPT)? {
            Some(choice) => choice != CANCEL_CHOICE,
            None => false,
        })
    }

    pub fn say(&mut self, message: &CmdMessage) -> io::Result<()> {
        writeln!(self.output, "{}", render_message(message))
    }

    pub fn say_all(&mut self, messages: &[CmdMessage]) -> io::Result<()> {
        for message in messages {
            self.say(message)?;
        }
        Ok(())
    }

    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}
