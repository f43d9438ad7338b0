//! Error types
//!
//! Defines domain-specific error types for each module of the gateway.

use std::fmt;
use std::io;

/// Transport-layer errors: the session is not usable or a wire operation
/// failed.
#[derive(Debug)]
pub enum TransportError {
    /// A send was attempted while no session is Open.
    NotConnected,
    /// Connection establishment failed; drives the reconnect loop.
    Connect(String),
    /// A send failed after the session was established.
    Send(String),
    /// Downloading referenced media content failed.
    MediaDownload(String),
    /// The transport backend does not support the requested operation.
    Unsupported(&'static str),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::NotConnected => write!(f, "No open session"),
            TransportError::Connect(msg) => write!(f, "Connect failed: {}", msg),
            TransportError::Send(msg) => write!(f, "Send failed: {}", msg),
            TransportError::MediaDownload(msg) => write!(f, "Media download failed: {}", msg),
            TransportError::Unsupported(op) => write!(f, "Operation not supported: {}", op),
        }
    }
}

impl std::error::Error for TransportError {}

/// Recoverable external-service errors. Always caught at the handler
/// boundary and converted to a user-facing reply.
#[derive(Debug)]
pub enum ApiError {
    /// Request-level failure: connect, timeout, TLS, body read.
    Request(reqwest::Error),
    /// Non-2xx response status.
    Status(u16),
    /// 2xx response whose body is missing an expected field.
    MalformedBody(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Request(e) => write!(f, "Request failed: {}", e),
            ApiError::Status(code) => write!(f, "Service returned status {}", code),
            ApiError::MalformedBody(what) => write!(f, "Malformed response body: {}", what),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Request(error)
    }
}

/// Credential store errors. Fatal at startup; logged mid-session.
#[derive(Debug)]
pub enum CredentialError {
    Read(io::Error),
    Write(io::Error),
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::Read(e) => write!(f, "Failed to read credentials: {}", e),
            CredentialError::Write(e) => write!(f, "Failed to write credentials: {}", e),
        }
    }
}

impl std::error::Error for CredentialError {}

/// Media transcoding errors for the sticker pipeline.
#[derive(Debug)]
pub enum MediaError {
    Decode(image::ImageError),
    Encode(image::ImageError),
    Io(io::Error),
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaError::Decode(e) => write!(f, "Failed to decode image: {}", e),
            MediaError::Encode(e) => write!(f, "Failed to encode sticker: {}", e),
            MediaError::Io(e) => write!(f, "Sticker staging IO error: {}", e),
        }
    }
}

impl std::error::Error for MediaError {}

impl From<io::Error> for MediaError {
    fn from(error: io::Error) -> Self {
        MediaError::Io(error)
    }
}

/// Session lifecycle errors.
#[derive(Debug)]
pub enum SessionError {
    /// The transport reported an explicit logout. Terminal: no reconnect is
    /// attempted and the operator must re-pair.
    LoggedOut,
    /// Connection establishment kept failing past the configured retry cap.
    RetriesExhausted(usize),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::LoggedOut => write!(f, "Session logged out; re-pairing required"),
            SessionError::RetriesExhausted(n) => {
                write!(f, "Gave up connecting after {} attempts", n)
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// General gateway error that encompasses all error types
#[derive(Debug)]
pub enum GatewayError {
    Transport(TransportError),
    Api(ApiError),
    Credential(CredentialError),
    Media(MediaError),
    Session(SessionError),
    Config(config::ConfigError),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Transport(e) => write!(f, "Transport error: {}", e),
            GatewayError::Api(e) => write!(f, "API error: {}", e),
            GatewayError::Credential(e) => write!(f, "Credential error: {}", e),
            GatewayError::Media(e) => write!(f, "Media error: {}", e),
            GatewayError::Session(e) => write!(f, "Session error: {}", e),
            GatewayError::Config(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<TransportError> for GatewayError {
    fn from(error: TransportError) -> Self {
        GatewayError::Transport(error)
    }
}

impl From<ApiError> for GatewayError {
    fn from(error: ApiError) -> Self {
        GatewayError::Api(error)
    }
}

impl From<CredentialError> for GatewayError {
    fn from(error: CredentialError) -> Self {
        GatewayError::Credential(error)
    }
}

impl From<MediaError> for GatewayError {
    fn from(error: MediaError) -> Self {
        GatewayError::Media(error)
    }
}

impl From<SessionError> for GatewayError {
    fn from(error: SessionError) -> Self {
        GatewayError::Session(error)
    }
}

impl From<config::ConfigError> for GatewayError {
    fn from(error: config::ConfigError) -> Self {
        GatewayError::Config(error)
    }
}
