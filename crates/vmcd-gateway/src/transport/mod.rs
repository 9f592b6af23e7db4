//! Transport layer (raw TCP).
//!
//! Exposes the accept loop, the per-connection exchange, and the codec that
//! turns a raw read into a routable envelope.

pub mod codec;
pub mod tcp;
