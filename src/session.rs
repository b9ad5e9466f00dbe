// Copyright (c) 2025 Lau Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Line-oriented command session over a [`LauTrie`].
//!
//! Each input line holds one command word, optionally followed by whitespace
//! and a single argument that runs to the end of the line:
//!
//! ```text
//! insert anna
//! search an
//! delete anna
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Lines that fail to
//! parse are reported on the output and the session carries on.

use std::fmt;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use std::str::FromStr;

use serde_json::json;
use tracing::{debug, warn};

use crate::config::OutputFormat;
use crate::data_structures::LauTrie;
use crate::error::{LauResult, SessionError};

const HELP: &str = "\
insert <word>    store a word
exists <word>    check whether a word is stored
search <prefix>  list stored words starting with a prefix
delete <word>    remove a stored word
len              number of stored words
dump             level-order rendering of the trie
clear            remove every word
help             this text
quit             end the session";

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Store a word
    Insert(String),
    /// Check whether a word is stored
    Exists(String),
    /// List stored words under a prefix
    Search(String),
    /// Remove a stored word
    Delete(String),
    /// Number of stored words
    Len,
    /// Level-order rendering of the trie
    Dump,
    /// Remove every word
    Clear,
    /// List the available commands
    Help,
    /// End the session
    Quit,
}

impl SessionCommand {
    /// The command word as typed in a session.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Insert(_) => "insert",
            Self::Exists(_) => "exists",
            Self::Search(_) => "search",
            Self::Delete(_) => "delete",
            Self::Len => "len",
            Self::Dump => "dump",
            Self::Clear => "clear",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}

impl fmt::Display for SessionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert(arg) | Self::Exists(arg) | Self::Search(arg) | Self::Delete(arg) => {
                write!(f, "{} {arg}", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}

fn with_argument(
    command: &'static str,
    argument: &str,
    build: fn(String) -> SessionCommand,
) -> Result<SessionCommand, SessionError> {
    if argument.is_empty() {
        return Err(SessionError::MissingArgument { command });
    }
    Ok(build(argument.to_owned()))
}

fn without_argument(
    command: &'static str,
    argument: &str,
    value: SessionCommand,
) -> Result<SessionCommand, SessionError> {
    if !argument.is_empty() {
        return Err(SessionError::UnexpectedArgument {
            command,
            argument: argument.to_owned(),
        });
    }
    Ok(value)
}

impl FromStr for SessionCommand {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, argument) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim_start()),
            None => (line, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "insert" => with_argument("insert", argument, Self::Insert),
            "exists" => with_argument("exists", argument, Self::Exists),
            "search" => with_argument("search", argument, Self::Search),
            "delete" => with_argument("delete", argument, Self::Delete),
            "len" => without_argument("len", argument, Self::Len),
            "dump" => without_argument("dump", argument, Self::Dump),
            "clear" => without_argument("clear", argument, Self::Clear),
            "help" => without_argument("help", argument, Self::Help),
            "quit" | "exit" => without_argument("quit", argument, Self::Quit),
            _ => Err(SessionError::UnknownCommand(name.to_owned())),
        }
    }
}

/// Executes session commands against a trie and writes their results.
#[derive(Debug)]
pub struct Session<W> {
    trie: LauTrie,
    out: W,
    format: OutputFormat,
}

impl<W: Write> Session<W> {
    /// Creates a session over `trie` writing results to `out`.
    pub fn new(trie: LauTrie, out: W, format: OutputFormat) -> Self {
        Self { trie, out, format }
    }

    /// The trie driven by this session.
    pub fn trie(&self) -> &LauTrie {
        &self.trie
    }

    /// Ends the session, handing back the trie.
    pub fn into_trie(self) -> LauTrie {
        self.trie
    }

    /// Executes a single command.
    ///
    /// # Returns
    ///
    /// * `Ok(ControlFlow::Break(()))` - If the command ends the session.
    /// * `Ok(ControlFlow::Continue(()))` - Otherwise.
    /// * `Err(LauError)` - If writing the result failed.
    pub fn execute(&mut self, command: SessionCommand) -> LauResult<ControlFlow<()>> {
        debug!(%command, "executing command");

        match command {
            SessionCommand::Insert(word) => self.trie.insert(word),
            SessionCommand::Exists(word) => {
                let found = self.trie.exists(&word);
                self.emit_bool(found)?;
            }
            SessionCommand::Search(prefix) => {
                let matches = self.trie.search(&prefix);
                self.emit_words(&matches)?;
            }
            SessionCommand::Delete(word) => {
                let removed = self.trie.delete(&word);
                self.emit_bool(removed)?;
            }
            SessionCommand::Len => {
                let len = self.trie.len();
                self.emit_count(len)?;
            }
            SessionCommand::Dump => {
                let rendering = self.trie.to_string();
                self.emit_text(&rendering)?;
            }
            SessionCommand::Clear => self.trie.clear(),
            SessionCommand::Help => self.emit_text(HELP)?,
            SessionCommand::Quit => return Ok(ControlFlow::Break(())),
        }

        self.out.flush()?;
        Ok(ControlFlow::Continue(()))
    }

    /// Executes `commands` in order, stopping after the first one that ends
    /// the session.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of commands executed.
    /// * `Err(LauError)` - If writing a result failed.
    pub fn execute_all<I>(&mut self, commands: I) -> LauResult<usize>
    where
        I: IntoIterator<Item = SessionCommand>,
    {
        let mut executed = 0;
        for command in commands {
            executed += 1;
            if self.execute(command)?.is_break() {
                break;
            }
        }
        Ok(executed)
    }

    /// Reads commands from `input` line by line until it is exhausted or a
    /// `quit` command is seen.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of commands executed.
    /// * `Err(LauError)` - If reading input or writing output failed.
    pub fn run<R: BufRead>(&mut self, input: R) -> LauResult<usize> {
        let mut executed = 0;
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.parse::<SessionCommand>() {
                Ok(command) => {
                    executed += 1;
                    if self.execute(command)?.is_break() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, line, "rejected command");
                    self.emit_error(&e)?;
                    self.out.flush()?;
                }
            }
        }
        Ok(executed)
    }

    fn emit_bool(&mut self, value: bool) -> LauResult<()> {
        match self.format {
            OutputFormat::Plain => writeln!(self.out, "{value}")?,
            OutputFormat::Json => self.emit_json(&json!(value))?,
        }
        Ok(())
    }

    fn emit_count(&mut self, value: usize) -> LauResult<()> {
        match self.format {
            OutputFormat::Plain => writeln!(self.out, "{value}")?,
            OutputFormat::Json => self.emit_json(&json!(value))?,
        }
        Ok(())
    }

    fn emit_words(&mut self, words: &[String]) -> LauResult<()> {
        match self.format {
            OutputFormat::Plain => {
                for word in words {
                    writeln!(self.out, "{word}")?;
                }
            }
            OutputFormat::Json => self.emit_json(&json!(words))?,
        }
        Ok(())
    }

    fn emit_text(&mut self, text: &str) -> LauResult<()> {
        match self.format {
            OutputFormat::Plain => writeln!(self.out, "{text}")?,
            OutputFormat::Json => self.emit_json(&json!(text))?,
        }
        Ok(())
    }

    fn emit_error(&mut self, error: &SessionError) -> LauResult<()> {
        match self.format {
            OutputFormat::Plain => writeln!(self.out, "error: {error}")?,
            OutputFormat::Json => self.emit_json(&json!({ "error": error.to_string() }))?,
        }
        Ok(())
    }

    fn emit_json(&mut self, value: &serde_json::Value) -> LauResult<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_plain(script: &str) -> String {
        let mut out = Vec::new();
        {
            let mut session = Session::new(LauTrie::new(), &mut out, OutputFormat::Plain);
            session.run(script.as_bytes()).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_session_round_trip() {
        let output = run_plain(
            "insert an\ninsert anna\ninsert annabelle\nsearch an\nexists ann\ndelete an\nlen\n",
        );
        assert_eq!(output, "an\nanna\nannabelle\nfalse\ntrue\n2\n");
    }

    #[test]
    fn test_session_stops_at_quit() {
        let output = run_plain("insert tea\nquit\nexists tea\n");
        assert_eq!(output, "");
    }

    #[test]
    fn test_session_reports_bad_lines() {
        let output = run_plain("frobnicate\n# comment\n\ninsert\nlen now\nlen\n");
        assert_eq!(
            output,
            "error: Unknown command: frobnicate\n\
             error: Command 'insert' requires an argument\n\
             error: Command 'len' takes no argument, got 'now'\n\
             0\n"
        );
    }

    #[test]
    fn test_execute_all_stops_at_quit() {
        let mut out = Vec::new();
        let mut session = Session::new(LauTrie::new(), &mut out, OutputFormat::Plain);
        let executed = session
            .execute_all([
                SessionCommand::Insert("an".into()),
                SessionCommand::Exists("an".into()),
                SessionCommand::Quit,
                SessionCommand::Insert("and".into()),
            ])
            .unwrap();
        assert_eq!(executed, 3);
        assert!(!session.trie().exists("and"));
        drop(session);
        assert_eq!(String::from_utf8(out).unwrap(), "true\n");
    }

    #[test]
    fn test_command_display() {
        assert_eq!(SessionCommand::Search("te".into()).to_string(), "search te");
        assert_eq!(SessionCommand::Dump.to_string(), "dump");
    }
}
