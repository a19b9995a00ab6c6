//! CLI command handlers
//!
//! Each input line is split into a command word and its argument text, then
//! dispatched to the matching handler. Handlers return the text to print or a
//! `TrackerError` whose message is printed instead.

pub mod add;
pub mod calculate;
pub mod delete;
pub mod help;
pub mod list;
pub mod shell;
pub mod update;

use tracing::warn;

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::storage::Storage;

pub use add::handle_add_command;
pub use calculate::handle_calculate_command;
pub use delete::handle_delete_command;
pub use help::help_text;
pub use list::handle_list_command;
pub use shell::{run_interactive, run_script};
pub use update::handle_update_command;

/// Command words understood by the shell
pub const COMMAND_NAMES: [&str; 7] = ["add", "update", "delete", "list", "calculate", "help", "bye"];

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Update(String),
    Delete(String),
    List(String),
    Calculate(String),
    Help,
    Bye,
}

impl Command {
    /// Split a line into its command word and argument text
    ///
    /// The command word is matched case-insensitively; the arguments keep
    /// their original spelling.
    pub fn parse(line: &str) -> TrackerResult<Self> {
        let line = line.trim();
        let (word, args) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim().to_string()),
            None => (line, String::new()),
        };

        match word.to_lowercase().as_str() {
            "add" => Ok(Self::Add(args)),
            "update" => Ok(Self::Update(args)),
            "delete" => Ok(Self::Delete(args)),
            "list" => Ok(Self::List(args)),
            "calculate" => Ok(Self::Calculate(args)),
            "help" => Ok(Self::Help),
            "bye" => Ok(Self::Bye),
            _ => Err(TrackerError::UnknownCommand(word.to_string())),
        }
    }

    /// Whether this command ends the session
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Bye)
    }
}

/// Run one command against the session
pub fn execute(command: &Command, storage: &mut Storage, settings: &Settings) -> TrackerResult<String> {
    let result = match command {
        Command::Add(args) => handle_add_command(storage, settings, args),
        Command::Update(args) => handle_update_command(storage, settings, args),
        Command::Delete(args) => handle_delete_command(storage, settings, args),
        Command::List(args) => handle_list_command(storage, settings, args),
        Command::Calculate(args) => handle_calculate_command(storage, settings, args),
        Command::Help => Ok(help_text()),
        Command::Bye => Ok("Bye! Hope to see you again soon!\n".to_string()),
    };

    if let Err(e) = &result {
        warn!(?command, error = %e, "command rejected");
    }
    result
}

/// Parse and run a raw input line
pub fn execute_line(line: &str, storage: &mut Storage, settings: &Settings) -> TrackerResult<String> {
    let command = Command::parse(line)?;
    execute(&command, storage, settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_words() {
        assert_eq!(
            Command::parse("add /pm cash /c Food").unwrap(),
            Command::Add("/pm cash /c Food".into())
        );
        assert_eq!(Command::parse("  LIST  ").unwrap(), Command::List(String::new()));
        assert_eq!(Command::parse("bye").unwrap(), Command::Bye);
        assert!(Command::parse("bye").unwrap().is_exit());
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            Command::parse("spend 5").unwrap_err(),
            TrackerError::UnknownCommand("spend".into())
        );
    }

    #[test]
    fn test_failed_command_keeps_state() {
        let mut storage = Storage::new();
        let settings = Settings::default();

        execute_line("add /pm cash /c Food /d porridge /a 5 /t 01/04/2022", &mut storage, &settings)
            .unwrap();
        let before = storage.clone();

        assert!(execute_line("add /pm cash /c Food /d rice /a -1 /t 01/04/2022", &mut storage, &settings)
            .is_err());
        assert!(execute_line("update /e 1 /pm cash /c Food /d rice /a 5 /t 31/04/2022", &mut storage, &settings)
            .is_err());
        assert!(execute_line("delete /e 4", &mut storage, &settings).is_err());
        assert_eq!(storage, before);
    }
}
