//! Transport collaborator
//!
//! Event types, the closed message-envelope variant set, the backend traits,
//! and a console backend for local operation.

pub mod console;
pub mod events;
pub mod traits;

pub use console::ConsoleTransport;
pub use events::{
    CloseReason, ConnectionState, CredentialBlob, ImageContent, InboundEvent, IncomingMessage,
    OutboundPayload, RawMessage,
};
pub use traits::{Transport, TransportLink, TransportSession};
