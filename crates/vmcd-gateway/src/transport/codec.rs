//! Decode-once codec for the transport layer.
//!
//! Raw read => frame (first `{` onward) => envelope. The frame bytes are
//! kept alongside the envelope so the routed service can decode its richer
//! shape from the same text.

use bytes::Bytes;
use vmcd_core::error::Result;
use vmcd_core::protocol::envelope::{decode_envelope, CommandEnvelope};
use vmcd_core::protocol::frame::extract_frame;

#[derive(Debug)]
pub struct Inbound {
    pub env: CommandEnvelope,
    pub frame: Bytes,
}

pub fn decode(raw: Bytes) -> Result<Inbound> {
    let frame = extract_frame(raw)?;
    let env = decode_envelope(&frame)?;
    Ok(Inbound { env, frame })
}
