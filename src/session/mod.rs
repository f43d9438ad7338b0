//! Session lifecycle
//!
//! The connection state machine, pairing-code rendering, and the gateway's
//! reconnect and event loops.

pub mod gateway;
pub mod pairing;
pub mod state;

pub use gateway::Gateway;
pub use state::Session;
