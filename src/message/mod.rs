//! Inbound message handling
//!
//! Normalizes transport envelopes into flat text for the router.

pub mod normalizer;

pub use normalizer::{NormalizedMessage, normalize};
