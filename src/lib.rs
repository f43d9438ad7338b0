pub mod config;
pub mod credentials;
pub mod error;
pub mod handlers;
pub mod message;
pub mod router;
pub mod services;
pub mod session;
pub mod transport;

pub use session::Gateway;
