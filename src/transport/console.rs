//! Console transport backend
//!
//! Runs the full gateway pipeline without a messaging network: each line the
//! operator types on stdin arrives as a one-message batch from the
//! `"operator"` sender, and replies print to stdout. Useful for local
//! operation and manual testing of the command handlers; media download is
//! not available, so `!sticker` reports failure here.

use async_trait::async_trait;
use log::info;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use crate::error::TransportError;
use crate::transport::events::{
    CloseReason, ConnectionState, CredentialBlob, InboundEvent, IncomingMessage, OutboundPayload,
    RawMessage,
};
use crate::transport::traits::{Transport, TransportLink, TransportSession};

const OPERATOR: &str = "operator";

pub struct ConsoleTransport;

struct ConsoleLink;

#[async_trait]
impl TransportLink for ConsoleLink {
    async fn send(&self, target: &str, payload: &OutboundPayload) -> Result<(), TransportError> {
        let line = match payload {
            OutboundPayload::Text(text) => format!("[to {}]\n{}\n", target, text),
            OutboundPayload::Sticker(bytes) => {
                format!("[to {}] <sticker, {} bytes>\n", target, bytes.len())
            }
        };

        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(line.as_bytes())
            .await
            .map_err(|e| TransportError::Send(e.to_string()))?;
        stdout
            .flush()
            .await
            .map_err(|e| TransportError::Send(e.to_string()))?;
        Ok(())
    }

    async fn download_media(&self, _media_ref: &str) -> Result<Vec<u8>, TransportError> {
        Err(TransportError::Unsupported(
            "console transport has no media store",
        ))
    }
}

#[async_trait]
impl Transport for ConsoleTransport {
    async fn connect(
        &self,
        _credentials: Option<CredentialBlob>,
    ) -> Result<TransportSession, TransportError> {
        let (tx, rx) = mpsc::channel(16);

        tokio::spawn(async move {
            let _ = tx
                .send(InboundEvent::ConnectionUpdate {
                    state: ConnectionState::Open,
                    close_reason: None,
                })
                .await;

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                let batch = vec![IncomingMessage {
                    sender: OPERATOR.to_string(),
                    message: RawMessage::Conversation { text: line },
                }];
                if tx.send(InboundEvent::MessageBatch(batch)).await.is_err() {
                    break;
                }
            }
            info!("Console input closed");
            // End-of-input is a deliberate logout, not a dropped connection;
            // reconnecting would immediately hit EOF again.
            let _ = tx
                .send(InboundEvent::ConnectionUpdate {
                    state: ConnectionState::Closed,
                    close_reason: Some(CloseReason::LoggedOut),
                })
                .await;
        });

        Ok(TransportSession {
            link: Arc::new(ConsoleLink),
            events: rx,
        })
    }
}
