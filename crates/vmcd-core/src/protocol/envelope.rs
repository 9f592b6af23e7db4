//! Command envelope (JSON).
//!
//! Only `cmd` is read here; the rest of the object is re-decoded by the
//! handler the envelope routes to.

use serde::Deserialize;

use crate::error::{Result, VmcError};
use crate::protocol::json::{decode_lenient, null_as_default};

/// Minimal shape needed to route a request.
#[derive(Debug, Deserialize)]
pub struct CommandEnvelope {
    /// Command discriminator (e.g. "login", "qrcode").
    #[serde(deserialize_with = "null_as_default")]
    pub cmd: String,
}

/// Decode the envelope from the extracted frame.
///
/// An empty (or `null`) `cmd` counts as missing.
pub fn decode_envelope(json: &[u8]) -> Result<CommandEnvelope> {
    let env: CommandEnvelope = decode_lenient(json)
        .map_err(|e| VmcError::Decode(format!("invalid envelope json: {e}")))?;
    if env.cmd.is_empty() {
        return Err(VmcError::Decode("envelope cmd is empty".into()));
    }
    Ok(env)
}
