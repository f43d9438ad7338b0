//! Session state
//!
//! One live session per process. A session owns its transport link and the
//! current connection state; it is replaced by a new instance on every
//! reconnect and never reused.

use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::error::TransportError;
use crate::transport::{ConnectionState, OutboundPayload, TransportLink};

/// The live authenticated connection to the messaging network.
pub struct Session {
    link: Arc<dyn TransportLink>,
    state: ConnectionState,
}

impl Session {
    /// A session starts Idle; the gateway drives it through Connecting and
    /// the transport's connection updates move it to Open or Closed.
    pub fn new(link: Arc<dyn TransportLink>) -> Self {
        Self {
            link,
            state: ConnectionState::Idle,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ConnectionState::Open
    }

    pub fn transition(&mut self, next: ConnectionState) {
        info!("Session state {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

/// Sessions gate every link operation on being Open, so a deferred send
/// after a close fails instead of racing the transport.
#[async_trait]
impl TransportLink for Session {
    async fn send(&self, target: &str, payload: &OutboundPayload) -> Result<(), TransportError> {
        if !self.is_open() {
            return Err(TransportError::NotConnected);
        }
        self.link.send(target, payload).await
    }

    async fn download_media(&self, media_ref: &str) -> Result<Vec<u8>, TransportError> {
        if !self.is_open() {
            return Err(TransportError::NotConnected);
        }
        self.link.download_media(media_ref).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::mocks::RecordingLink;

    #[test]
    fn test_new_session_starts_idle() {
        let session = Session::new(Arc::new(RecordingLink::new()));
        assert_eq!(session.state(), ConnectionState::Idle);
        assert!(!session.is_open());
    }

    #[test]
    fn test_transition_updates_state() {
        let mut session = Session::new(Arc::new(RecordingLink::new()));
        session.transition(ConnectionState::Connecting);
        assert_eq!(session.state(), ConnectionState::Connecting);
        session.transition(ConnectionState::Open);
        assert!(session.is_open());
        session.transition(ConnectionState::Closed);
        assert_eq!(session.state(), ConnectionState::Closed);
    }

    #[tokio::test]
    async fn test_send_fails_unless_open() {
        let link = Arc::new(RecordingLink::new());
        let mut session = Session::new(link.clone());

        let payload = OutboundPayload::Text("hi".to_string());
        assert!(matches!(
            session.send("a@chat", &payload).await,
            Err(TransportError::NotConnected)
        ));

        session.transition(ConnectionState::Connecting);
        assert!(matches!(
            session.send("a@chat", &payload).await,
            Err(TransportError::NotConnected)
        ));

        session.transition(ConnectionState::Open);
        assert!(session.send("a@chat", &payload).await.is_ok());

        session.transition(ConnectionState::Closed);
        assert!(matches!(
            session.send("a@chat", &payload).await,
            Err(TransportError::NotConnected)
        ));

        assert_eq!(link.sent_payloads().await.len(), 1);
    }
}
