//! Interactive Telegram client for the terminal.
//!
//! Reads `API_ID`, `API_HASH` and optionally `SESSION_NAME` from the
//! environment, signs in (prompting for phone, code and 2FA password on the
//! first run), then drops into a line-oriented prompt.
//!
//! # Usage
//!
//! ```bash
//! API_ID=12345 API_HASH=0123abcd tgsh
//! ```
//!
//! # Commands
//!
//! Type `help` at the prompt for the full list:
//! - `dialogs` / `select <num>` - list conversations and pick one
//! - `history [n]` / `send <text>` / `sendfile <path>` - read and write
//! - `download <msg_id> <path>` - save a message's media to disk
//! - `lang` - toggle between Russian and English output
//! - `exit` / `quit` - disconnect and leave

use std::process::ExitCode;

use grammers_client::{Client, SignInError};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use tgsh::chat::{
    ChatSession, ClientConfig, Command, ParseError, connect, notification_loop, parse_command,
};
use tgsh::{Error, Lang, Result};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let messages = Lang::default().messages();
    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} ({err})", messages.missing_config);
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", messages.error_prefix);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ClientConfig) -> Result<()> {
    let client = connect(&config).await?;
    let mut rl = DefaultEditor::new()
        .map_err(|err| Error::client("failed to initialize line editor", Some(Box::new(err))))?;

    let authorized = client
        .is_authorized()
        .await
        .map_err(|err| Error::client("failed to check authorization", Some(Box::new(err))))?;
    if !authorized {
        login(&client, &config, &mut rl).await?;
    }

    let messages = Lang::default().messages();
    println!("{}", messages.authorized);
    println!("{}", messages.banner);

    let notifier = tokio::spawn(notification_loop(client.clone()));
    let mut session = ChatSession::new(client.clone());

    loop {
        // Readline blocks, so it runs on the blocking pool; this keeps the
        // notification listener live regardless of worker-thread count.
        let prompt = session.messages().prompt;
        let (editor, readline) = tokio::task::spawn_blocking(move || {
            let result = rl.readline(prompt);
            (rl, result)
        })
        .await
        .map_err(|err| Error::client("input task failed", Some(Box::new(err))))?;
        rl = editor;

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);
                match dispatch(&mut session, line).await {
                    Ok(true) => break,
                    Ok(false) => {}
                    // Command failures are reported and the loop continues.
                    Err(err) => println!("{} {err}", session.messages().error_prefix),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(err) => {
                println!("{} {err}", session.messages().error_prefix);
                break;
            }
        }
    }

    notifier.abort();
    client
        .session()
        .save_to_file(&config.session_file)
        .map_err(|err| Error::io("failed to save session", err))?;
    Ok(())
}

/// Runs one command. Returns `Ok(true)` when the loop should terminate.
async fn dispatch(session: &mut ChatSession, line: &str) -> Result<bool> {
    match parse_command(line) {
        Command::Help => println!("{}", session.messages().help),
        Command::ToggleLang => {
            let lang = session.toggle_lang();
            println!("{} {}", session.messages().language_is, lang.code());
        }
        Command::Me => session.me().await?,
        Command::Dialogs => session.list_dialogs().await?,
        Command::Select(index) => session.select(index).await?,
        Command::History(limit) => session.history(limit).await?,
        Command::Send(text) => session.send(&text).await?,
        Command::SendFile(path) => session.send_file(&path).await?,
        Command::Download { message_id, target } => session.download(message_id, &target).await?,
        Command::Quit => return Ok(true),
        Command::Invalid(ParseError::Usage(usage)) => println!("{usage}"),
        Command::Invalid(ParseError::BadNumber(_)) => {
            println!("{}", session.messages().invalid_number)
        }
        Command::Invalid(ParseError::Unknown(_)) => {
            println!("{}", session.messages().unknown_command)
        }
    }
    Ok(false)
}

/// Interactive first-run sign-in: phone, confirmation code, then the 2FA
/// password when the account has one. Saves the session file on success.
async fn login(client: &Client, config: &ClientConfig, rl: &mut DefaultEditor) -> Result<()> {
    let messages = Lang::default().messages();

    let phone = prompt_line(rl, messages.enter_phone)?;
    let token = client
        .request_login_code(phone.trim())
        .await
        .map_err(|err| Error::client("failed to request login code", Some(Box::new(err))))?;

    let code = prompt_line(rl, messages.enter_code)?;
    match client.sign_in(&token, code.trim()).await {
        Ok(_) => {}
        Err(SignInError::PasswordRequired(password_token)) => {
            let password = prompt_line(rl, messages.enter_password)?;
            client
                .check_password(password_token, password.trim())
                .await
                .map_err(|err| Error::authentication(format!("password check failed: {err}")))?;
        }
        Err(err) => return Err(Error::authentication(format!("sign-in failed: {err}"))),
    }

    client
        .session()
        .save_to_file(&config.session_file)
        .map_err(|err| Error::io("failed to save session", err))?;
    Ok(())
}

fn prompt_line(rl: &mut DefaultEditor, prompt: &str) -> Result<String> {
    rl.readline(prompt)
        .map_err(|err| Error::client("input aborted", Some(Box::new(err))))
}
