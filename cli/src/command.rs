//! Line commands understood by the terminal wizard.
//!
//! Plain text adds words, so `exit` on its own is a word; commands start with `/`.

use crate::wizard::Action;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardCommand {
    /// Comma-separated words to add.
    Add(String),
    Remove(String),
    Next,
    Back,
    Submit,
    Reset,
    Help,
    Quit,
    Unknown(String),
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<WizardCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Some(WizardCommand::Add(line.to_string()));
    };
    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((n, a)) => (n, a.trim()),
        None => (rest, ""),
    };
    Some(match name.to_lowercase().as_str() {
        "rm" | "remove" if !arg.is_empty() => WizardCommand::Remove(arg.to_string()),
        "next" | "continue" => WizardCommand::Next,
        "back" => WizardCommand::Back,
        "submit" | "find" => WizardCommand::Submit,
        "reset" | "restart" => WizardCommand::Reset,
        "help" | "?" => WizardCommand::Help,
        "quit" | "exit" | "q" => WizardCommand::Quit,
        _ => WizardCommand::Unknown(line.to_string()),
    })
}

/// How to trigger `action` from the prompt.
pub fn command_hint(action: Action) -> &'static str {
    match action {
        Action::AddWords => "type words separated by commas",
        Action::RemoveWord => "/rm <word>",
        Action::ContinueToReview => "/next",
        Action::BackToInput => "/back",
        Action::Submit => "/submit",
        Action::Reset => "/reset",
    }
}
