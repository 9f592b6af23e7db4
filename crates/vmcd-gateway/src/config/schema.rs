use std::net::SocketAddr;

use serde::Deserialize;
use vmcd_core::error::{Result, VmcError};
use vmcd_core::protocol::frame::DEFAULT_READ_CAP;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    pub terminal: TerminalSection,

    #[serde(default)]
    pub qrcode: QrCodeSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(VmcError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.gateway.validate()?;
        self.terminal.validate()?;
        self.qrcode.validate()?;

        Ok(())
    }
}

/// How a request is read off the socket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FramingMode {
    /// One `read` call, as deployed terminals expect.
    #[default]
    SingleRead,
    /// Keep reading until the JSON object is complete, EOF, or the cap.
    Accumulate,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_read_buf_bytes")]
    pub read_buf_bytes: usize,

    #[serde(default)]
    pub framing: FramingMode,

    /// Absent means the read phase is unbounded.
    #[serde(default)]
    pub read_timeout_ms: Option<u64>,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            read_buf_bytes: default_read_buf_bytes(),
            framing: FramingMode::default(),
            read_timeout_ms: None,
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(64..=65536).contains(&self.read_buf_bytes) {
            return Err(VmcError::Config(
                "gateway.read_buf_bytes must be between 64 and 65536".into(),
            ));
        }
        if let Some(ms) = self.read_timeout_ms {
            if !(100..=600000).contains(&ms) {
                return Err(VmcError::Config(
                    "gateway.read_timeout_ms must be between 100 and 600000".into(),
                ));
            }
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen
            .parse()
            .map_err(|e| VmcError::Config(format!("gateway.listen is not a socket address: {e}")))
    }
}

fn default_listen() -> String {
    "0.0.0.0:4040".into()
}
fn default_read_buf_bytes() -> usize {
    DEFAULT_READ_CAP
}

/// Values handed to terminals at login.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TerminalSection {
    pub carrier_code: String,
    pub server_list: String,
}

impl TerminalSection {
    pub fn validate(&self) -> Result<()> {
        if self.carrier_code.trim().is_empty() {
            return Err(VmcError::Config("terminal.carrier_code must not be empty".into()));
        }
        if self.server_list.trim().is_empty() {
            return Err(VmcError::Config("terminal.server_list must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QrCodeSection {
    #[serde(default = "default_stub_code")]
    pub stub_code: String,
}

impl Default for QrCodeSection {
    fn default() -> Self {
        Self {
            stub_code: default_stub_code(),
        }
    }
}

impl QrCodeSection {
    pub fn validate(&self) -> Result<()> {
        if self.stub_code.is_empty() {
            return Err(VmcError::Config("qrcode.stub_code must not be empty".into()));
        }
        Ok(())
    }
}

fn default_stub_code() -> String {
    "XXXXXXXXXXXXXX".into()
}
