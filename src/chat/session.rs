//! Connection handling and per-session command state.
//!
//! [`ChatSession`] owns the two pieces of mutable state the REPL has — the
//! selected chat and the display language — together with the connected
//! client handle, and implements one method per command that talks to
//! Telegram. Handlers that require a selected chat check the precondition
//! before touching the network and report the localized message themselves.

use std::fmt;
use std::path::Path;

use grammers_client::types::{Chat, Media, Message};
use grammers_client::{Client, Config, InitParams, InputMessage};
use grammers_session::Session;
use log::debug;

use crate::chat::config::ClientConfig;
use crate::error::{Error, Result};
use crate::format::{media_label, resolve_download_path};
use crate::lang::{Lang, Messages};

/// Number of messages `history` shows when no count is given.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Opens the session file and connects to Telegram.
///
/// The connection is unauthenticated until `is_authorized` confirms the
/// stored session, or the caller completes the sign-in flow.
pub async fn connect(config: &ClientConfig) -> Result<Client> {
    let session = Session::load_file_or_create(&config.session_file)
        .map_err(|err| Error::io("failed to open session file", err))?;
    let client = Client::connect(Config {
        session,
        api_id: config.api_id,
        api_hash: config.api_hash.clone(),
        params: InitParams::default(),
    })
    .await
    .map_err(|err| Error::client("failed to connect to Telegram", Some(Box::new(err))))?;
    debug!("connected, session file {}", config.session_file.display());
    Ok(client)
}

/// Kind of conversation shown in a dialog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    User,
    Group,
    Channel,
}

impl DialogKind {
    fn of(chat: &Chat) -> Self {
        match chat {
            Chat::User(_) => DialogKind::User,
            Chat::Group(_) => DialogKind::Group,
            Chat::Channel(_) => DialogKind::Channel,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DialogKind::User => "User",
            DialogKind::Group => "Group",
            DialogKind::Channel => "Channel",
        }
    }
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a dialog listing. A snapshot: positions are only meaningful
/// relative to the listing that produced them.
#[derive(Debug, Clone)]
pub struct DialogEntry {
    pub name: String,
    pub kind: DialogKind,
    pub id: i64,
    chat: Chat,
}

/// The REPL's mutable state: the selected chat and the display language.
///
/// Kept separate from the connection so the precondition logic the command
/// handlers rely on can be exercised without a connected client.
#[derive(Debug, Default)]
pub struct SessionState {
    selected: Option<Chat>,
    lang: Lang,
}

impl SessionState {
    /// Creates a state with nothing selected and the default language.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active display language.
    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Returns the string table for the active language.
    pub fn messages(&self) -> &'static Messages {
        self.lang.messages()
    }

    /// Switches to the other language and returns it.
    pub fn toggle_lang(&mut self) -> Lang {
        self.lang = self.lang.toggle();
        self.lang
    }

    /// Returns whether a chat is currently selected.
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Returns the selected chat, printing the localized reminder when
    /// nothing is selected.
    ///
    /// Every handler that needs a chat calls this before touching the
    /// network, so a `None` here means the command stops without a request.
    pub fn selected_or_report(&self) -> Option<&Chat> {
        if self.selected.is_none() {
            println!("{}", self.messages().no_chat);
        }
        self.selected.as_ref()
    }

    fn select(&mut self, chat: Chat) {
        self.selected = Some(chat);
    }
}

/// A connected client plus the REPL's mutable state.
pub struct ChatSession {
    client: Client,
    state: SessionState,
}

impl ChatSession {
    /// Creates a session around a connected client with nothing selected.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            state: SessionState::new(),
        }
    }

    /// Returns the string table for the active language.
    pub fn messages(&self) -> &'static Messages {
        self.state.messages()
    }

    /// Switches to the other language and returns it.
    pub fn toggle_lang(&mut self) -> Lang {
        self.state.toggle_lang()
    }

    /// Prints the current user's name, handle and id.
    pub async fn me(&self) -> Result<()> {
        let me = self
            .client
            .get_me()
            .await
            .map_err(|err| Error::client("failed to fetch current user", Some(Box::new(err))))?;
        println!(
            "{} @{} id={}",
            me.full_name(),
            me.username().unwrap_or("-"),
            me.id()
        );
        Ok(())
    }

    /// Fetches a fresh snapshot of all conversations, in listing order.
    pub async fn fetch_dialogs(&self) -> Result<Vec<DialogEntry>> {
        let mut iter = self.client.iter_dialogs();
        let mut entries = Vec::new();
        while let Some(dialog) = iter
            .next()
            .await
            .map_err(|err| Error::client("failed to list dialogs", Some(Box::new(err))))?
        {
            let chat = dialog.chat().clone();
            entries.push(DialogEntry {
                name: chat.name().to_string(),
                kind: DialogKind::of(&chat),
                id: chat.id(),
                chat,
            });
        }
        debug!("fetched {} dialogs", entries.len());
        Ok(entries)
    }

    /// Lists all conversations with 1-based positions.
    pub async fn list_dialogs(&self) -> Result<()> {
        let entries = self.fetch_dialogs().await?;
        for (position, entry) in entries.iter().enumerate() {
            println!(
                "{}. {} ({}) — id={}",
                position + 1,
                display_name(&entry.name),
                entry.kind,
                entry.id
            );
        }
        Ok(())
    }

    /// Selects the conversation at 1-based `index`.
    ///
    /// The dialog list is re-fetched on every call, so positions follow the
    /// current dialog order rather than the last `dialogs` output. Out-of-range
    /// indices leave the previous selection untouched.
    pub async fn select(&mut self, index: i64) -> Result<()> {
        let entries = self.fetch_dialogs().await?;
        let position = checked_index(index, entries.len());
        let Some(entry) = position.and_then(|p| entries.into_iter().nth(p)) else {
            println!("{}", self.messages().index_out_of_range);
            return Ok(());
        };
        println!("{} {}", self.messages().selected, display_name(&entry.name));
        self.state.select(entry.chat);
        Ok(())
    }

    /// Prints the last `limit` messages of the selected chat, oldest first.
    pub async fn history(&self, limit: Option<usize>) -> Result<()> {
        let Some(chat) = self.state.selected_or_report() else {
            return Ok(());
        };
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
        let mut iter = self.client.iter_messages(chat).limit(limit);
        let mut messages = Vec::new();
        while let Some(message) = iter
            .next()
            .await
            .map_err(|err| Error::client("failed to fetch history", Some(Box::new(err))))?
        {
            messages.push(message);
        }
        if messages.is_empty() {
            println!("{}", self.messages().no_messages);
            return Ok(());
        }
        for message in messages.iter().rev() {
            println!("{}", format_history_line(message));
        }
        Ok(())
    }

    /// Sends a text message to the selected chat.
    pub async fn send(&self, text: &str) -> Result<()> {
        let Some(chat) = self.state.selected_or_report() else {
            return Ok(());
        };
        self.client
            .send_message(chat, text)
            .await
            .map_err(|err| Error::client("failed to send message", Some(Box::new(err))))?;
        println!("{}", self.messages().sent_ok);
        Ok(())
    }

    /// Uploads and sends a file to the selected chat. The library detects
    /// the attachment type from the file itself.
    pub async fn send_file(&self, path: &Path) -> Result<()> {
        let Some(chat) = self.state.selected_or_report() else {
            return Ok(());
        };
        if !path.exists() {
            println!("{}", self.messages().file_not_found);
            return Ok(());
        }
        debug!("uploading {}", path.display());
        let uploaded = self
            .client
            .upload_file(path)
            .await
            .map_err(|err| Error::io("failed to upload file", err))?;
        self.client
            .send_message(chat, InputMessage::text("").file(uploaded))
            .await
            .map_err(|err| Error::client("failed to send file", Some(Box::new(err))))?;
        println!("{}", self.messages().file_sent);
        Ok(())
    }

    /// Downloads the media of message `message_id` to `target`.
    pub async fn download(&self, message_id: i32, target: &str) -> Result<()> {
        let Some(chat) = self.state.selected_or_report() else {
            return Ok(());
        };
        let found = self
            .client
            .get_messages_by_id(chat, &[message_id])
            .await
            .map_err(|err| Error::client("failed to fetch message", Some(Box::new(err))))?;
        let Some(message) = found.into_iter().next().flatten() else {
            println!("{}", self.messages().message_not_found);
            return Ok(());
        };
        let Some(media) = message.media() else {
            println!("{}", self.messages().no_media);
            return Ok(());
        };
        let dest = resolve_download_path(target, &suggested_file_name(&media, message.id()))
            .map_err(|err| Error::io("failed to prepare download path", err))?;
        debug!("downloading message {} to {}", message.id(), dest.display());
        message
            .download_media(&dest)
            .await
            .map_err(|err| Error::client("failed to download media", Some(Box::new(err))))?;
        println!("{} {}", self.messages().saved_to, dest.display());
        Ok(())
    }
}

/// Maps a 1-based listing index to a vector position, or `None` when it is
/// outside `1..=len`.
fn checked_index(index: i64, len: usize) -> Option<usize> {
    if index >= 1 && (index as usize) <= len {
        Some(index as usize - 1)
    } else {
        None
    }
}

fn display_name(name: &str) -> &str {
    if name.is_empty() { "—" } else { name }
}

fn format_history_line(message: &Message) -> String {
    let sender = message
        .sender()
        .map(|chat| chat.name().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "?".to_string());
    let mut line = format!("[{}] {}: {}", message.id(), sender, message.text());
    if let Some(media) = message.media() {
        let (kind, size) = media_kind_size(&media);
        line.push(' ');
        line.push_str(&media_label(kind, size));
    }
    line
}

fn media_kind_size(media: &Media) -> (&'static str, Option<u64>) {
    match media {
        Media::Photo(_) => ("Photo", None),
        Media::Document(document) => ("Document", Some(document.size().max(0) as u64)),
        Media::Sticker(_) => ("Sticker", None),
        _ => ("Media", None),
    }
}

fn suggested_file_name(media: &Media, message_id: i32) -> String {
    match media {
        Media::Document(document) if !document.name().is_empty() => document.name().to_string(),
        Media::Photo(_) => format!("message-{message_id}.jpg"),
        _ => format!("message-{message_id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_reports_no_selection() {
        // send, sendfile, history and download all start by consulting
        // selected_or_report; a None return stops them before any request.
        let state = SessionState::new();
        assert!(!state.has_selection());
        assert!(state.selected_or_report().is_none());
    }

    #[test]
    fn state_language_toggles_independently_of_selection() {
        let mut state = SessionState::new();
        assert_eq!(state.lang(), Lang::Ru);
        assert_eq!(state.toggle_lang(), Lang::En);
        assert_eq!(state.messages().no_chat, Lang::En.messages().no_chat);
        assert_eq!(state.toggle_lang(), Lang::Ru);
        assert!(!state.has_selection());
    }

    #[test]
    fn checked_index_bounds() {
        assert_eq!(checked_index(1, 3), Some(0));
        assert_eq!(checked_index(3, 3), Some(2));
        assert_eq!(checked_index(0, 3), None);
        assert_eq!(checked_index(4, 3), None);
        assert_eq!(checked_index(-1, 3), None);
        assert_eq!(checked_index(1, 0), None);
    }

    #[test]
    fn dialog_kind_names() {
        assert_eq!(DialogKind::User.as_str(), "User");
        assert_eq!(DialogKind::Group.as_str(), "Group");
        assert_eq!(DialogKind::Channel.as_str(), "Channel");
        assert_eq!(DialogKind::Channel.to_string(), "Channel");
    }

    #[test]
    fn empty_names_get_a_placeholder() {
        assert_eq!(display_name(""), "—");
        assert_eq!(display_name("Alice"), "Alice");
    }
}
