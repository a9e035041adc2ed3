// Public modules
pub mod chat;
pub mod error;
pub mod format;
pub mod lang;

// Re-exports
pub use error::{Error, Result};
pub use lang::{Lang, Messages};
