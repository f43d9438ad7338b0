//! Credential persistence
//!
//! Stores the opaque authentication blob across restarts.

pub mod store;

pub use store::CredentialStore;
