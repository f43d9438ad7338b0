//! Command routing
//!
//! Parses normalized text into commands and dispatches them to handlers
//! with per-message failure isolation.

pub mod dispatch;
pub mod parser;

pub use dispatch::{dispatch, dispatch_batch};
pub use parser::{COMMAND_PREFIX, ParsedCommand, parse_command};
