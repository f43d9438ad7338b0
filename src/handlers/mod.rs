//! Command handlers
//!
//! One handler per command. Each maps `(sender, args, raw message)` to
//! exactly one reply or one classified failure; the router turns failures
//! into user-facing text so nothing a handler does can take down dispatch.

pub mod chat;
pub mod menu;
pub mod sticker;
pub mod weather;
pub mod wiki;
pub mod ytsearch;

use std::fmt;

use crate::router::ParsedCommand;
use crate::services::{MediaTranscoder, Services};
use crate::transport::{IncomingMessage, TransportLink};

/// Successful handler outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Sticker(Vec<u8>),
}

/// Classified handler failure. Both variants carry the text the sender
/// should see; `Api` additionally carries detail for the log.
#[derive(Debug)]
pub enum HandlerError {
    /// Missing argument or attachment. No external call was made.
    Usage(&'static str),
    /// A collaborator call failed; recoverable, reply and move on.
    Api {
        reply: &'static str,
        detail: String,
    },
}

impl HandlerError {
    pub fn api(reply: &'static str, source: impl fmt::Display) -> Self {
        HandlerError::Api {
            reply,
            detail: source.to_string(),
        }
    }

    /// The text sent back to the sender.
    pub fn reply_text(&self) -> &str {
        match self {
            HandlerError::Usage(text) => text,
            HandlerError::Api { reply, .. } => reply,
        }
    }
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::Usage(text) => write!(f, "Usage error: {}", text),
            HandlerError::Api { detail, .. } => write!(f, "Service call failed: {}", detail),
        }
    }
}

/// Everything a handler may touch: content services, the live transport
/// link (media download, gated on the session being Open), and the sticker
/// transcoder.
pub struct HandlerContext<'a> {
    pub services: &'a Services,
    pub link: &'a dyn TransportLink,
    pub transcoder: &'a dyn MediaTranscoder,
}

/// Dispatches a parsed command to its handler.
///
/// Returns `None` for a command name not in the static set: unknown
/// commands are silently ignored rather than answered.
pub async fn handle_command(
    ctx: &HandlerContext<'_>,
    command: &ParsedCommand,
    incoming: &IncomingMessage,
) -> Option<Result<Reply, HandlerError>> {
    match command.name.as_str() {
        "!menu" => Some(Ok(menu::handle())),
        "!chat" => Some(chat::handle(ctx, &command.args).await),
        "!weather" => Some(weather::handle(ctx, &command.args).await),
        "!wiki" => Some(wiki::handle(ctx, &command.args).await),
        "!ytsearch" => Some(ytsearch::handle(ctx, &command.args).await),
        "!sticker" => Some(sticker::handle(ctx, &incoming.message).await),
        _ => None,
    }
}
