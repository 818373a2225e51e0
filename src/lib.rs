//! Formats MediaWiki recent changes as colourful lines for IRC feeds.
//!
//! The entry point is [`format_line`]: one [`ChangeEvent`] plus a
//! [`FeedConfig`] and a [`SiteConfig`] snapshot in, one colour-escaped
//! line out. `None` means the event is suppressed and nothing should be
//! sent. The transformation is pure; delivering the line to a socket or
//! queue is the caller's business.

pub mod config;
pub mod event;
pub mod formatter;
pub mod irc;
pub mod title;
pub mod util;

pub use config::{FeedConfig, InterwikiPrefix, SiteConfig};
pub use event::{ChangeEvent, ChangeType};
pub use formatter::format_line;
pub use title::{Namespace, Title};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[error("invalid page title: {0:?}")]
    BadTitle(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests;
