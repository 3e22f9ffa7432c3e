//! Typed client for the Telegram Bot API.
//!
//! [`Telegram`] exposes one async method per remote method. Each builds a
//! flat [`Request`] and hands it to a [`Dispatch`] implementation, normally
//! the [`HttpDispatcher`]. File references are resolved to download
//! locations by [`download_location`] and [`Telegram::get_file_link`].

pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod extra;
pub mod file_link;
pub mod format;
pub mod input_file;
pub mod media;
pub mod request;
pub mod telegram;
pub mod transport;
pub mod types;

pub use context::{ApiMode, DeploymentContext};
pub use dispatch::Dispatch;
pub use error::{Error, Result};
pub use file_link::{FileRef, download_location};
pub use format::{FormattedText, TextContext};
pub use input_file::{InputFile, VideoNoteFile};
pub use request::Request;
pub use telegram::{EditTarget, Telegram};
pub use transport::HttpDispatcher;

/// Payload and result types shared with the type library.
pub use teloxide::types as tg;
