//! Message normalization
//!
//! Unwraps transport envelopes into a flat `(sender, text)` pair. Ephemeral
//! wrappers nest, so unwrapping recurses with a hard depth cap; anything
//! without a terminal text payload normalizes to nothing and is silently
//! ignored upstream.

use crate::transport::{IncomingMessage, RawMessage};

/// Envelope nesting deeper than this is treated as non-text. Real wrapping
/// is one or two levels; the cap only exists to bound recursion.
pub(crate) const MAX_UNWRAP_DEPTH: usize = 8;

/// Flat view of one inbound message. Transient: lives for one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedMessage {
    pub sender: String,
    pub text: String,
}

/// Normalizes an inbound message, or `None` when no text payload exists.
pub fn normalize(incoming: &IncomingMessage) -> Option<NormalizedMessage> {
    extract_text(&incoming.message, 0).map(|text| NormalizedMessage {
        sender: incoming.sender.clone(),
        text: text.to_string(),
    })
}

/// Recursively unwraps known envelope kinds until a terminal text payload is
/// found. An image terminates with its caption so a captioned image can
/// carry a command.
fn extract_text(message: &RawMessage, depth: usize) -> Option<&str> {
    if depth > MAX_UNWRAP_DEPTH {
        return None;
    }

    match message {
        RawMessage::Conversation { text } => Some(text),
        RawMessage::ExtendedText { text, .. } => Some(text),
        RawMessage::Ephemeral(inner) => extract_text(inner, depth + 1),
        RawMessage::Image(content) => content.caption.as_deref(),
        RawMessage::Unsupported => None,
    }
}
