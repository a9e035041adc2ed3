//! Interactive chat client built on top of the grammers client library.
//!
//! This module provides the pieces behind the `tgsh` REPL:
//!
//! - [`commands`]: parsing of one input line into a typed command
//! - [`config`]: startup configuration from the process environment
//! - [`session`]: the connection plus selected-chat and language state
//! - [`notify`]: the background listener for incoming messages
//!
//! # Architecture
//!
//! The binary owns the read loop and dispatches each parsed command to a
//! [`ChatSession`] method. The notification listener runs as a separate task
//! on the same runtime and only writes to stdout; all mutable state lives in
//! the session.

mod commands;
mod config;
mod notify;
mod session;

pub use commands::{Command, ParseError, parse_command};
pub use config::ClientConfig;
pub use notify::notification_loop;
pub use session::{
    ChatSession, DEFAULT_HISTORY_LIMIT, DialogEntry, DialogKind, SessionState, connect,
};
