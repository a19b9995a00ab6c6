//! Line-oriented shell
//!
//! Interactive mode reads lines with rustyline (history, command completion);
//! script mode reads stdin without a prompt. Both feed every line through
//! `execute_line`, print the result or the error message, and keep going
//! until `bye` or end of input.

use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context as ReadlineContext, Editor, Helper};
use tracing::{debug, info};

use super::{execute, Command, COMMAND_NAMES};
use crate::config::{Settings, TrackerPaths};
use crate::error::{TrackerError, TrackerResult};
use crate::storage::Storage;

const LOGO: &str = r" __  __ _         _ __  __      __  __
|  \/  (_)_ _  __| |  \/  |_  _|  \/  |___ _ _  ___ _  _
| |\/| | | ' \/ _` | |\/| | || | |\/| / _ \ ' \/ -_) || |
|_|  |_|_|_||_\__,_|_|  |_|\_, |_|  |_\___/_||_\___|\_, |
                           |__/                     |__/";

/// Whether the shell should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// One shell session: the records plus the settings it was started with
pub struct Session<'a> {
    pub storage: Storage,
    settings: &'a Settings,
}

impl<'a> Session<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            storage: Storage::new(),
            settings,
        }
    }

    /// Handle one line, writing the command output or error message to `out`
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> TrackerResult<LoopControl> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(LoopControl::Continue);
        }
        debug!(line, "input");

        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}\n", e)?;
                return Ok(LoopControl::Continue);
            }
        };

        match execute(&command, &mut self.storage, self.settings) {
            Ok(text) => writeln!(out, "{}", text)?,
            Err(e) => writeln!(out, "{}\n", e)?,
        }

        if command.is_exit() {
            Ok(LoopControl::Exit)
        } else {
            Ok(LoopControl::Continue)
        }
    }

    /// Feed every line of `input` through the session
    pub fn run_lines<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> TrackerResult<()> {
        for line in input.lines() {
            if self.handle_line(&line?, out)? == LoopControl::Exit {
                break;
            }
        }
        Ok(())
    }
}

/// Write the logo and greeting when the settings ask for it
pub fn print_banner<W: Write>(settings: &Settings, out: &mut W) -> TrackerResult<()> {
    if settings.show_banner {
        writeln!(out, "\n{}", LOGO)?;
        writeln!(out, "Welcome to MindMyMoney")?;
        writeln!(out, "What can I do for you?\n")?;
    }
    Ok(())
}

/// Read commands from stdin without a prompt
pub fn run_script(settings: &Settings) -> TrackerResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_banner(settings, &mut out)?;

    let mut session = Session::new(settings);
    session.run_lines(io::stdin().lock(), &mut out)?;
    info!(records = session.storage.record_count(), "script finished");
    Ok(())
}

/// Read commands interactively with history and completion
pub fn run_interactive(settings: &Settings, paths: &TrackerPaths) -> TrackerResult<()> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new().map_err(readline_error)?;
    editor.set_helper(Some(CommandHelper::new()));

    let history = paths.history_file();
    if editor.load_history(&history).is_err() {
        debug!(path = %history.display(), "no history loaded");
    }

    let stdout = io::stdout();
    print_banner(settings, &mut stdout.lock())?;

    let mut session = Session::new(settings);
    loop {
        match editor.readline(&settings.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.trim()).ok();
                }
                if session.handle_line(&line, &mut stdout.lock())? == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(readline_error(err)),
        }
    }

    let saved = paths
        .ensure_directories()
        .and_then(|_| editor.save_history(&history).map_err(readline_error));
    if let Err(e) = saved {
        debug!(error = %e, "history not saved");
    }
    Ok(())
}

fn readline_error(err: ReadlineError) -> TrackerError {
    TrackerError::Io(err.to_string())
}

struct CommandHelper {
    commands: Vec<&'static str>,
}

impl CommandHelper {
    fn new() -> Self {
        Self {
            commands: COMMAND_NAMES.to_vec(),
        }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        // Only the command word completes
        if prefix.trim_start().contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        let start = prefix.len() - prefix.trim_start().len();
        let needle = prefix[start..].to_ascii_lowercase();
        let candidates = self
            .commands
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (String, Storage) {
        let settings = Settings::default();
        let mut session = Session::new(&settings);
        let mut out = Vec::new();
        session.run_lines(Cursor::new(script), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), session.storage)
    }

    #[test]
    fn test_errors_are_printed_and_loop_continues() {
        let (output, storage) = run(
            "frobnicate\n\
             add /pm cash /c Food /d porridge /a 5 /t 31/04/2022\n\
             add /pm cash /c Food /d porridge /a 5 /t 01/04/2022\n",
        );
        assert!(output.contains("Unknown command \"frobnicate\""));
        assert!(output.contains("Invalid date \"31/04/2022\""));
        assert!(output.contains("Successfully added"));
        assert_eq!(storage.expenditures.len(), 1);
    }

    #[test]
    fn test_bye_stops_reading() {
        let (output, storage) = run(
            "bye\n\
             add /pm cash /c Food /d porridge /a 5 /t 01/04/2022\n",
        );
        assert!(output.starts_with("Bye!"));
        assert_eq!(storage.record_count(), 0);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let (output, _) = run("\n   \n");
        assert!(output.is_empty());
    }

    #[test]
    fn test_banner_respects_settings() {
        let mut settings = Settings::default();
        let mut out = Vec::new();
        print_banner(&settings, &mut out).unwrap();
        assert!(String::from_utf8_lossy(&out).contains("Welcome to MindMyMoney"));

        settings.show_banner = false;
        let mut out = Vec::new();
        print_banner(&settings, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_completion_of_command_word() {
        let helper = CommandHelper::new();
        let history = DefaultHistory::new();
        let ctx = ReadlineContext::new(&history);

        let (start, candidates) = helper.complete("up", 2, &ctx).unwrap();
        assert_eq!(start, 0);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].replacement, "update");

        let (_, candidates) = helper.complete("add /pm", 7, &ctx).unwrap();
        assert!(candidates.is_empty());
    }
}
