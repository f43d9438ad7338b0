//! Transport event and message types
//!
//! The transport library is a black box; everything it tells the gateway
//! arrives as an `InboundEvent` on a single queue. Message payloads use a
//! closed variant set so envelope unwrapping is exhaustive at compile time
//! instead of duck-typed field probing.

/// Opaque authentication material negotiated by the transport.
pub type CredentialBlob = Vec<u8>;

/// Connection lifecycle states of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Idle,
    Connecting,
    Open,
    Closed,
}

/// Why a session closed. Only the logged-out distinction matters: it is the
/// single terminal reason that must not trigger a reconnect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseReason {
    LoggedOut,
    ConnectionLost(String),
}

/// Reference to downloadable media content held by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageContent {
    pub media_ref: String,
    pub caption: Option<String>,
}

/// A transport message envelope. Envelopes nest: an ephemeral
/// (disappearing-message) wrapper carries another envelope, and an extended
/// text may reference a quoted envelope through its reply metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawMessage {
    /// Plain conversation text.
    Conversation { text: String },
    /// Extended text, optionally replying to (quoting) another message.
    ExtendedText {
        text: String,
        quoted: Option<Box<RawMessage>>,
    },
    /// Ephemeral wrapper around another envelope.
    Ephemeral(Box<RawMessage>),
    /// An image with an optional caption.
    Image(ImageContent),
    /// Any envelope kind the gateway does not understand.
    Unsupported,
}

/// One element of a message batch: who sent it and what arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub sender: String,
    pub message: RawMessage,
}

/// Everything the transport can report, delivered in arrival order on one
/// event stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// One-time pairing code to render for the operator when no stored
    /// credentials exist.
    PairingCode(String),
    /// Lifecycle transition of the live session.
    ConnectionUpdate {
        state: ConnectionState,
        close_reason: Option<CloseReason>,
    },
    /// The transport negotiated fresh credential material; persist it now.
    CredentialsRotated(CredentialBlob),
    /// A batch of inbound messages in arrival order.
    MessageBatch(Vec<IncomingMessage>),
}

/// Outbound payload kinds the gateway can send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundPayload {
    Text(String),
    Sticker(Vec<u8>),
}
