//! Shared error type across vmcd crates.

use thiserror::Error;

/// Message sent to a terminal whenever its request cannot be decoded.
pub const DECODE_FAILURE_MSG: &str = "failed to parse request";

/// Stable error categories (used in logs and tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Reading from the connection failed or the peer went away.
    TransportRead,
    /// No JSON object start in the payload.
    Framing,
    /// Envelope or command payload is not decodable.
    Decode,
    /// Well-formed command nobody handles.
    Unrouted,
    /// Response could not be produced.
    Encode,
    /// Response could not be delivered.
    Write,
    /// Startup configuration is invalid.
    Config,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::TransportRead => "TRANSPORT_READ",
            ErrorKind::Framing => "FRAMING",
            ErrorKind::Decode => "DECODE",
            ErrorKind::Unrouted => "UNROUTED",
            ErrorKind::Encode => "ENCODE",
            ErrorKind::Write => "WRITE",
            ErrorKind::Config => "CONFIG",
        }
    }
}

/// What the connection owes the peer after a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyPolicy {
    /// Answer with an `ErrorResult` carrying the given message.
    ErrorResult(&'static str),
    /// Close without writing anything.
    Silent,
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, VmcError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum VmcError {
    #[error("transport read failed: {0}")]
    TransportRead(String),
    #[error("no JSON object in payload")]
    Framing,
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("unrouted command: {0}")]
    Unrouted(String),
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("write failed: {0}")]
    Write(String),
    #[error("config: {0}")]
    Config(String),
}

impl VmcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VmcError::TransportRead(_) => ErrorKind::TransportRead,
            VmcError::Framing => ErrorKind::Framing,
            VmcError::Decode(_) => ErrorKind::Decode,
            VmcError::Unrouted(_) => ErrorKind::Unrouted,
            VmcError::Encode(_) => ErrorKind::Encode,
            VmcError::Write(_) => ErrorKind::Write,
            VmcError::Config(_) => ErrorKind::Config,
        }
    }

    /// Only decode failures are ever reported to the terminal; everything
    /// else (including an unknown `cmd`) closes the connection silently.
    pub fn reply_policy(&self) -> ReplyPolicy {
        match self {
            VmcError::Decode(_) => ReplyPolicy::ErrorResult(DECODE_FAILURE_MSG),
            _ => ReplyPolicy::Silent,
        }
    }
}
