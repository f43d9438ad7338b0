//! `!sticker` — image to sticker
//!
//! The image comes either directly on the message (its caption is the
//! command) or from a quoted message referenced by the reply metadata.
//! Without one of those there is nothing to do and no collaborator is
//! called.

use crate::handlers::{HandlerContext, HandlerError, Reply};
use crate::message::normalizer::MAX_UNWRAP_DEPTH;
use crate::transport::{ImageContent, RawMessage};

const USAGE: &str = "\u{274C} Please send or reply to an image with *!sticker*";
const FAILED: &str = "\u{274C} Failed to create sticker. Please try again.";
const COMMAND: &str = "!sticker";

pub async fn handle(
    ctx: &HandlerContext<'_>,
    message: &RawMessage,
) -> Result<Reply, HandlerError> {
    let image = locate_image(message, 0).ok_or(HandlerError::Usage(USAGE))?;

    let bytes = ctx
        .link
        .download_media(&image.media_ref)
        .await
        .map_err(|e| HandlerError::api(FAILED, e))?;

    let sticker = ctx
        .transcoder
        .to_sticker(&bytes)
        .map_err(|e| HandlerError::api(FAILED, e))?;

    Ok(Reply::Sticker(sticker))
}

/// Finds the image the command refers to, peeling ephemeral wrappers on the
/// way. A direct image only counts when its own caption carries the
/// command.
fn locate_image(message: &RawMessage, depth: usize) -> Option<&ImageContent> {
    if depth > MAX_UNWRAP_DEPTH {
        return None;
    }

    match message {
        RawMessage::Image(content)
            if content
                .caption
                .as_deref()
                .is_some_and(|caption| caption.starts_with(COMMAND)) =>
        {
            Some(content)
        }
        RawMessage::ExtendedText {
            text,
            quoted: Some(quoted),
        } if text.starts_with(COMMAND) => quoted_image(quoted, depth + 1),
        RawMessage::Ephemeral(inner) => locate_image(inner, depth + 1),
        _ => None,
    }
}

/// A quoted image needs no caption of its own; the reply text carried the
/// command.
fn quoted_image(message: &RawMessage, depth: usize) -> Option<&ImageContent> {
    if depth > MAX_UNWRAP_DEPTH {
        return None;
    }

    match message {
        RawMessage::Image(content) => Some(content),
        RawMessage::Ephemeral(inner) => quoted_image(inner, depth + 1),
        _ => None,
    }
}
