//! Transport collaborator interface
//!
//! The messaging network's wire protocol lives behind these traits. A
//! backend connects, hands back a send/download link plus the inbound event
//! stream, and the gateway never sees anything lower-level.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::TransportError;
use crate::transport::events::{CredentialBlob, InboundEvent, OutboundPayload};

/// Live connection handle: sending and media download.
#[async_trait]
pub trait TransportLink: Send + Sync {
    /// Sends a payload to the given target id.
    async fn send(&self, target: &str, payload: &OutboundPayload) -> Result<(), TransportError>;

    /// Downloads the media content behind a reference into memory.
    async fn download_media(&self, media_ref: &str) -> Result<Vec<u8>, TransportError>;
}

/// A freshly established transport session: the link plus the event stream
/// the single consumer loop drains.
pub struct TransportSession {
    pub link: std::sync::Arc<dyn TransportLink>,
    pub events: mpsc::Receiver<InboundEvent>,
}

/// Connection factory. Called once at startup and once per reconnect; each
/// call yields an independent session.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Establishes a session. `credentials` is the previously persisted blob
    /// if any; without it the backend is expected to begin a pairing flow
    /// and emit a `PairingCode` event.
    async fn connect(
        &self,
        credentials: Option<CredentialBlob>,
    ) -> Result<TransportSession, TransportError>;
}
