use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use vmcd_core::error::{Result, VmcError};
use vmcd_core::protocol::command::CommandKind;
use vmcd_core::protocol::envelope::CommandEnvelope;
use vmcd_core::protocol::response::Reply;

/// One handler per `cmd` value. The service re-decodes `frame` with its own
/// richer shape.
#[async_trait]
pub trait CommandService: Send + Sync {
    fn kind(&self) -> CommandKind;
    async fn handle(&self, frame: Bytes) -> Result<Reply>;
}

/// Registry and router for command services.
#[derive(Default)]
pub struct Dispatcher {
    services: DashMap<CommandKind, Arc<dyn CommandService>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
        }
    }

    pub fn register(&self, svc: Arc<dyn CommandService>) {
        self.services.insert(svc.kind(), svc);
    }

    pub fn registered_commands(&self) -> Vec<&'static str> {
        self.services.iter().map(|e| e.key().as_str()).collect()
    }

    /// Route on `env.cmd`. Unknown or unregistered commands yield
    /// `VmcError::Unrouted`.
    pub async fn dispatch(&self, env: &CommandEnvelope, frame: Bytes) -> Result<Reply> {
        let cmd = env.cmd.as_str();
        let handler = CommandKind::from_cmd(cmd)
            .and_then(|kind| self.services.get(&kind).map(|e| e.value().clone()))
            .ok_or_else(|| VmcError::Unrouted(cmd.to_string()))?;
        handler.handle(frame).await
    }
}
