//! Reply shapes written back to the terminal.
//!
//! Field order is the wire order.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VmcError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResult {
    pub cmd: String,
    pub vmc_no: i64,
    pub carrier_code: String,
    pub date_time: String,
    pub server_list: String,
    /// Status code, 0 = success.
    pub ret: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResult {
    pub cmd: String,
    pub vmc_no: i64,
    pub qr_type: String,
    /// Opaque code from the QR generator.
    pub qrcode: String,
    pub order_no: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

impl ErrorResult {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

/// Any reply the gateway can write. Serializes as the bare inner object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Login(LoginResult),
    Payment(PaymentResult),
    Error(ErrorResult),
}

impl From<LoginResult> for Reply {
    fn from(r: LoginResult) -> Self {
        Reply::Login(r)
    }
}

impl From<PaymentResult> for Reply {
    fn from(r: PaymentResult) -> Self {
        Reply::Payment(r)
    }
}

impl From<ErrorResult> for Reply {
    fn from(r: ErrorResult) -> Self {
        Reply::Error(r)
    }
}

/// Serialize a reply into the bytes of exactly one write.
pub fn encode_reply(reply: &Reply) -> Result<Vec<u8>> {
    serde_json::to_vec(reply).map_err(|e| VmcError::Encode(format!("reply json: {e}")))
}
