//! Per-command request payloads.
//!
//! Fields absent from the payload, or sent as `null`, take their zero value,
//! as deployed terminals omit fields freely. Keys match case-insensitively
//! (see `protocol::json`). A field present with the wrong JSON type is still
//! a decode failure.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VmcError};
use crate::protocol::json::{decode_lenient, null_as_default};

/// Suffix appended to the request `cmd` in every reply.
pub const ACK_SUFFIX: &str = "_r";

/// Known commands. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Login,
    QrPayment,
}

impl CommandKind {
    pub fn from_cmd(cmd: &str) -> Option<Self> {
        match cmd {
            "login" => Some(CommandKind::Login),
            "qrcode" => Some(CommandKind::QrPayment),
            _ => None,
        }
    }

    /// Wire value of `cmd`.
    pub fn as_str(self) -> &'static str {
        match self {
            CommandKind::Login => "login",
            CommandKind::QrPayment => "qrcode",
        }
    }
}

/// Acknowledgement `cmd` for a request `cmd`.
pub fn ack_cmd(cmd: &str) -> String {
    format!("{cmd}{ACK_SUFFIX}")
}

/// Terminal login / handshake announcement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginCommand {
    #[serde(deserialize_with = "null_as_default")]
    pub comp_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub login_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub sign: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cmd: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vmc_no: i64,
}

/// QR-code payment request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentCommand {
    #[serde(rename = "Amount", alias = "amount", deserialize_with = "null_as_default")]
    pub amount: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub order_no: String,
    #[serde(deserialize_with = "null_as_default")]
    pub product_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub qr_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cmd: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vmc_no: i64,
}

/// Re-decode the frame with a command-specific shape.
pub fn decode_command<T: DeserializeOwned>(kind: CommandKind, json: &[u8]) -> Result<T> {
    decode_lenient(json)
        .map_err(|e| VmcError::Decode(format!("invalid {} payload: {e}", kind.as_str())))
}
