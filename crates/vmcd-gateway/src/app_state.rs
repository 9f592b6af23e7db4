//! Shared application state for the vmcd gateway.
//!
//! Built once at startup and cloned into every connection task. Nothing in
//! here is mutated after construction.

use std::sync::Arc;

use vmcd_core::error::Result;

use crate::clock::{Clock, LocalClock};
use crate::config::GatewayConfig;
use crate::dispatch::Dispatcher;
use crate::qr::{QrCodeProvider, StubQrProvider};
use crate::services::{LoginService, QrPaymentService};

#[derive(Clone)]
pub struct AppState {
    cfg: Arc<GatewayConfig>,
    dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Build application state with the process clock and the stub QR
    /// generator configured under `qrcode`.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let qr = Arc::new(StubQrProvider::new(cfg.qrcode.stub_code.clone()));
        Self::with_collaborators(cfg, Arc::new(LocalClock), qr)
    }

    pub fn with_collaborators(
        cfg: GatewayConfig,
        clock: Arc<dyn Clock>,
        qr: Arc<dyn QrCodeProvider>,
    ) -> Result<Self> {
        cfg.validate()?;

        let dispatcher = Dispatcher::new();
        dispatcher.register(Arc::new(LoginService::new(&cfg.terminal, clock)));
        dispatcher.register(Arc::new(QrPaymentService::new(qr)));

        let mut cmds = dispatcher.registered_commands();
        cmds.sort_unstable();
        tracing::info!(commands = ?cmds, "command services registered");

        Ok(Self {
            cfg: Arc::new(cfg),
            dispatcher: Arc::new(dispatcher),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.cfg
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        Arc::clone(&self.dispatcher)
    }
}
