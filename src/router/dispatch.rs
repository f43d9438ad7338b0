//! Command dispatch
//!
//! Drives one message batch through normalize, parse, and handle, strictly
//! sequentially in arrival order. The handler boundary converts every
//! failure into at most one reply to the sender, so a misbehaving handler
//! can never stall the batch or the loop above it.

use log::{debug, error, info, warn};

use crate::handlers::{HandlerContext, HandlerError, Reply, handle_command};
use crate::message::normalize;
use crate::router::parser::parse_command;
use crate::transport::{IncomingMessage, OutboundPayload};

/// Dispatches a batch in arrival order.
pub async fn dispatch_batch(ctx: &HandlerContext<'_>, batch: &[IncomingMessage]) {
    for incoming in batch {
        dispatch(ctx, incoming).await;
    }
}

/// Dispatches one inbound message. Non-text messages, unprefixed text, and
/// unknown commands are silently ignored.
pub async fn dispatch(ctx: &HandlerContext<'_>, incoming: &IncomingMessage) {
    let Some(normalized) = normalize(incoming) else {
        return;
    };
    let Some(command) = parse_command(&normalized.text) else {
        return;
    };

    info!("Dispatching {} from {}", command.name, normalized.sender);

    let payload = match handle_command(ctx, &command, incoming).await {
        None => {
            debug!("Ignoring unknown command {}", command.name);
            return;
        }
        Some(Ok(Reply::Text(text))) => OutboundPayload::Text(text),
        Some(Ok(Reply::Sticker(bytes))) => OutboundPayload::Sticker(bytes),
        Some(Err(failure @ HandlerError::Usage(_))) => {
            debug!("{} from {}: {}", command.name, normalized.sender, failure);
            OutboundPayload::Text(failure.reply_text().to_string())
        }
        Some(Err(failure)) => {
            error!("{} from {}: {}", command.name, normalized.sender, failure);
            OutboundPayload::Text(failure.reply_text().to_string())
        }
    };

    // Best-effort: the batch has already been processed, so a failed send is
    // logged and swallowed.
    if let Err(e) = ctx.link.send(&normalized.sender, &payload).await {
        warn!("Failed to send reply to {}: {}", normalized.sender, e);
    }
}
