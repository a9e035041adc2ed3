//! Command parsing for the chat REPL.
//!
//! One input line maps to one [`Command`]. The command token is matched
//! case-insensitively; everything after the first space is a single argument
//! string, split once more only where the command itself needs two parts.

use std::path::PathBuf;

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the localized command list.
    Help,

    /// Toggle the display language between ru and en.
    ToggleLang,

    /// Print the current user's name, handle and id.
    Me,

    /// List all conversations with their 1-based positions.
    Dialogs,

    /// Select the conversation at the given 1-based position.
    Select(i64),

    /// Show the last `n` messages of the selected chat.
    /// `None` uses the default limit; an unparsable count also falls back to
    /// the default rather than failing.
    History(Option<usize>),

    /// Send a text message to the selected chat.
    Send(String),

    /// Upload and send a file to the selected chat.
    SendFile(PathBuf),

    /// Download the media of a message in the selected chat.
    Download {
        /// Message id as shown by `history`.
        message_id: i32,
        /// Target file or directory path.
        target: String,
    },

    /// Terminate the loop and disconnect.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(ParseError),
}

/// Why a line failed to parse into a runnable command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A numeric argument did not parse.
    BadNumber(String),
    /// A required argument was missing; holds the usage line to print.
    Usage(&'static str),
    /// The command token matched nothing.
    Unknown(String),
}

/// Parses one non-empty input line into a [`Command`].
///
/// # Examples
///
/// ```
/// # use tgsh::chat::{Command, parse_command};
/// assert_eq!(parse_command("select 2"), Command::Select(2));
/// assert_eq!(parse_command("QUIT"), Command::Quit);
/// ```
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let command = parts.next().unwrap_or("").to_lowercase();
    let argument = parts.next().map(str::trim).filter(|s| !s.is_empty());

    match command.as_str() {
        "help" => Command::Help,
        "lang" => Command::ToggleLang,
        "me" => Command::Me,
        "dialogs" => Command::Dialogs,
        "select" => match argument {
            Some(arg) => match arg.parse::<i64>() {
                Ok(index) => Command::Select(index),
                Err(_) => Command::Invalid(ParseError::BadNumber(arg.to_string())),
            },
            None => Command::Invalid(ParseError::Usage("select <num>")),
        },
        "history" => Command::History(argument.and_then(|arg| arg.parse().ok())),
        "send" => match argument {
            Some(text) => Command::Send(text.to_string()),
            None => Command::Invalid(ParseError::Usage("send <text>")),
        },
        "sendfile" => match argument {
            Some(path) => Command::SendFile(PathBuf::from(path)),
            None => Command::Invalid(ParseError::Usage("sendfile <path>")),
        },
        "download" => parse_download(argument),
        "exit" | "quit" => Command::Quit,
        _ => Command::Invalid(ParseError::Unknown(command)),
    }
}

fn parse_download(argument: Option<&str>) -> Command {
    const USAGE: &str = "download <msg_id> <path>";
    let Some(arg) = argument else {
        return Command::Invalid(ParseError::Usage(USAGE));
    };
    let mut parts = arg.splitn(2, ' ');
    let id = parts.next().unwrap_or("");
    let Some(target) = parts.next().map(str::trim).filter(|s| !s.is_empty()) else {
        return Command::Invalid(ParseError::Usage(USAGE));
    };
    match id.parse::<i32>() {
        Ok(message_id) => Command::Download {
            message_id,
            target: target.to_string(),
        },
        Err(_) => Command::Invalid(ParseError::BadNumber(id.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_commands() {
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("lang"), Command::ToggleLang);
        assert_eq!(parse_command("me"), Command::Me);
        assert_eq!(parse_command("dialogs"), Command::Dialogs);
    }

    #[test]
    fn command_token_is_case_insensitive() {
        assert_eq!(parse_command("HELP"), Command::Help);
        assert_eq!(parse_command("Select 3"), Command::Select(3));
        assert_eq!(parse_command("  quit  "), Command::Quit);
    }

    #[test]
    fn parse_select() {
        assert_eq!(parse_command("select 1"), Command::Select(1));
        assert_eq!(parse_command("select 0"), Command::Select(0));
        assert_eq!(parse_command("select -2"), Command::Select(-2));
        assert_eq!(
            parse_command("select two"),
            Command::Invalid(ParseError::BadNumber("two".to_string()))
        );
        assert_eq!(
            parse_command("select"),
            Command::Invalid(ParseError::Usage("select <num>"))
        );
    }

    #[test]
    fn parse_history() {
        assert_eq!(parse_command("history"), Command::History(None));
        assert_eq!(parse_command("history 5"), Command::History(Some(5)));
        // An unparsable count silently keeps the default.
        assert_eq!(parse_command("history lots"), Command::History(None));
    }

    #[test]
    fn parse_send() {
        assert_eq!(
            parse_command("send hello world"),
            Command::Send("hello world".to_string())
        );
        assert_eq!(
            parse_command("send"),
            Command::Invalid(ParseError::Usage("send <text>"))
        );
    }

    #[test]
    fn parse_sendfile() {
        assert_eq!(
            parse_command("sendfile /tmp/cat.jpg"),
            Command::SendFile(PathBuf::from("/tmp/cat.jpg"))
        );
        assert_eq!(
            parse_command("sendfile"),
            Command::Invalid(ParseError::Usage("sendfile <path>"))
        );
    }

    #[test]
    fn parse_download_arguments() {
        assert_eq!(
            parse_command("download 5 /tmp/out/"),
            Command::Download {
                message_id: 5,
                target: "/tmp/out/".to_string(),
            }
        );
        assert_eq!(
            parse_command("download abc /tmp/out"),
            Command::Invalid(ParseError::BadNumber("abc".to_string()))
        );
        assert_eq!(
            parse_command("download 5"),
            Command::Invalid(ParseError::Usage("download <msg_id> <path>"))
        );
        assert_eq!(
            parse_command("download"),
            Command::Invalid(ParseError::Usage("download <msg_id> <path>"))
        );
    }

    #[test]
    fn parse_quit_commands() {
        assert_eq!(parse_command("exit"), Command::Quit);
        assert_eq!(parse_command("quit"), Command::Quit);
    }

    #[test]
    fn unknown_commands() {
        assert_eq!(
            parse_command("foo"),
            Command::Invalid(ParseError::Unknown("foo".to_string()))
        );
        assert_eq!(
            parse_command("foo bar baz"),
            Command::Invalid(ParseError::Unknown("foo".to_string()))
        );
    }
}
