//! Shared fixtures for gateway tests.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use async_trait::async_trait;

use vmcd_core::error::{Result, VmcError};
use vmcd_gateway::app_state::AppState;
use vmcd_gateway::clock::Clock;
use vmcd_gateway::config::{self, GatewayConfig};
use vmcd_gateway::qr::{QrCodeProvider, QrOrder};

pub const FIXED_NOW: &str = "2024-05-06 07:08:09";

pub struct FixedClock;

impl Clock for FixedClock {
    fn now_formatted(&self) -> String {
        FIXED_NOW.to_string()
    }
}

/// Encodes the order into the code so tests can see what was passed.
pub struct EchoQr;

#[async_trait]
impl QrCodeProvider for EchoQr {
    async fn generate(&self, order: &QrOrder) -> Result<String> {
        Ok(format!(
            "{}:{}:{}:{}",
            order.qr_type, order.order_no, order.product_id, order.amount
        ))
    }
}

pub struct FailingQr;

#[async_trait]
impl QrCodeProvider for FailingQr {
    async fn generate(&self, _order: &QrOrder) -> Result<String> {
        Err(VmcError::Encode("qr backend down".into()))
    }
}

pub fn test_config(extra_gateway: &str) -> GatewayConfig {
    let yaml = format!(
        r#"
version: 1
gateway:
  listen: "127.0.0.1:0"
{extra_gateway}
terminal:
  carrier_code: "CC-TEST"
  server_list: "10.1.2.3"
"#
    );
    config::load_from_str(&yaml).expect("test config must parse")
}

pub fn test_state() -> AppState {
    state_with_qr(Arc::new(EchoQr))
}

pub fn state_with_qr(qr: Arc<dyn QrCodeProvider>) -> AppState {
    AppState::with_collaborators(test_config(""), Arc::new(FixedClock), qr).unwrap()
}
