//! Error types for the tgsh client.
//!
//! This module defines the error type used throughout the crate. Network and
//! protocol failures originate in the grammers client library and are wrapped
//! here with a short description of the operation that failed.

use std::error;
use std::fmt;
use std::io;
use std::sync::Arc;

/// The main error type for the tgsh client.
#[derive(Clone, Debug)]
pub enum Error {
    /// Missing or malformed startup configuration.
    Config {
        /// Human-readable error message.
        message: String,
    },

    /// Authentication or sign-in error.
    Authentication {
        /// Human-readable error message.
        message: String,
    },

    /// An operation against the Telegram backend failed.
    Client {
        /// Human-readable error message.
        message: String,
        /// The underlying error from the client library.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// I/O error.
    Io {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Arc<io::Error>,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Error::Authentication {
            message: message.into(),
        }
    }

    /// Creates a new client error.
    pub fn client(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Client {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new I/O error.
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Error::Io {
            message: message.into(),
            source: Arc::new(source),
        }
    }

    /// Returns true if this error is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config { .. })
    }

    /// Returns true if this error is related to authentication.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Error::Authentication { .. })
    }

    /// Returns true if this error is a client error.
    pub fn is_client(&self) -> bool {
        matches!(self, Error::Client { .. })
    }

    /// Returns true if this error is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config { message } => write!(f, "configuration error: {message}"),
            Error::Authentication { message } => write!(f, "authentication error: {message}"),
            Error::Client { message, source } => match source {
                Some(source) => write!(f, "{message}: {source}"),
                None => write!(f, "{message}"),
            },
            Error::Io { message, source } => write!(f, "{message}: {source}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Config { .. } | Error::Authentication { .. } => None,
            Error::Client { source, .. } => source
                .as_ref()
                .map(|source| source.as_ref() as &(dyn error::Error + 'static)),
            Error::Io { source, .. } => Some(source.as_ref()),
        }
    }
}

/// A specialized Result type for tgsh operations.
pub type Result<T> = std::result::Result<T, Error>;
