//! Gateway core
//!
//! Owns the session lifecycle: connect with persisted credentials, drain the
//! transport's event stream on a single consumer loop, and reconnect with a
//! fresh session when the connection drops — unless the transport reported a
//! logout, which is terminal until the operator re-pairs.

use log::{error, info, warn};
use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::credentials::CredentialStore;
use crate::error::{GatewayError, SessionError};
use crate::handlers::HandlerContext;
use crate::router;
use crate::services::{MediaTranscoder, Services};
use crate::session::pairing::render_pairing_code;
use crate::session::state::Session;
use crate::transport::{CloseReason, ConnectionState, InboundEvent, Transport};

/// How one session ended, as seen by the reconnect loop.
enum SessionEnd {
    /// Recoverable: connect a fresh session.
    ConnectionLost,
    /// Terminal: the operator must re-pair before anything works again.
    LoggedOut,
}

pub struct Gateway {
    config: GatewayConfig,
    transport: Arc<dyn Transport>,
    store: CredentialStore,
    services: Services,
    transcoder: Arc<dyn MediaTranscoder>,
}

impl Gateway {
    pub fn new(
        config: GatewayConfig,
        transport: Arc<dyn Transport>,
        services: Services,
        transcoder: Arc<dyn MediaTranscoder>,
    ) -> Self {
        let store = CredentialStore::new(config.credentials_path());
        Self {
            config,
            transport,
            store,
            services,
            transcoder,
        }
    }

    /// Runs the gateway until the session is terminally closed. Returns
    /// `Ok(())` after a logout; connect failures past the retry cap and
    /// unusable credential storage are errors.
    pub async fn start(&self) -> Result<(), GatewayError> {
        let mut connect_failures = 0;

        loop {
            match self.run_session().await {
                Ok(SessionEnd::LoggedOut) => {
                    warn!(
                        "{}; delete {} and restart to re-pair",
                        SessionError::LoggedOut,
                        self.store.path().display()
                    );
                    return Ok(());
                }
                Ok(SessionEnd::ConnectionLost) => {
                    connect_failures = 0;
                    info!("Connection closed. Reconnecting");
                }
                Err(GatewayError::Transport(e)) => {
                    connect_failures += 1;
                    if connect_failures >= self.config.max_connect_retries {
                        error!("Connect failed: {}", e);
                        return Err(SessionError::RetriesExhausted(connect_failures).into());
                    }
                    warn!(
                        "Connect failed ({}); retrying in {:?}",
                        e,
                        self.config.reconnect_delay()
                    );
                    tokio::time::sleep(self.config.reconnect_delay()).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Runs one session from connect to close.
    async fn run_session(&self) -> Result<SessionEnd, GatewayError> {
        let credentials = self.store.load()?;
        if credentials.is_none() {
            info!("No stored credentials; expecting an interactive pairing flow");
        }

        let mut transport_session = self.transport.connect(credentials).await?;
        let mut session = Session::new(Arc::clone(&transport_session.link));
        session.transition(ConnectionState::Connecting);

        while let Some(event) = transport_session.events.recv().await {
            match event {
                InboundEvent::PairingCode(code) => render_pairing_code(&code),
                InboundEvent::CredentialsRotated(blob) => {
                    // Write-through. A failed save is not fatal: the next
                    // rotation carries the full blob again.
                    if let Err(e) = self.store.save(&blob) {
                        error!("{}", e);
                    }
                }
                InboundEvent::ConnectionUpdate {
                    state: ConnectionState::Open,
                    ..
                } => {
                    session.transition(ConnectionState::Open);
                    info!("Connected to the messaging network");
                }
                InboundEvent::ConnectionUpdate {
                    state: ConnectionState::Closed,
                    close_reason,
                } => {
                    session.transition(ConnectionState::Closed);
                    return Ok(match close_reason {
                        Some(CloseReason::LoggedOut) => SessionEnd::LoggedOut,
                        _ => SessionEnd::ConnectionLost,
                    });
                }
                InboundEvent::ConnectionUpdate { .. } => {}
                InboundEvent::MessageBatch(batch) => {
                    let ctx = HandlerContext {
                        services: &self.services,
                        link: &session,
                        transcoder: self.transcoder.as_ref(),
                    };
                    router::dispatch_batch(&ctx, &batch).await;
                }
            }
        }

        // The event stream ended without a close event: the transport task
        // died. Same recovery as a lost connection.
        Ok(SessionEnd::ConnectionLost)
    }
}
