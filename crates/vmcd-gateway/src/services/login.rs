use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use vmcd_core::error::Result;
use vmcd_core::protocol::command::{ack_cmd, decode_command, CommandKind, LoginCommand};
use vmcd_core::protocol::response::{LoginResult, Reply};

use crate::clock::Clock;
use crate::config::TerminalSection;
use crate::dispatch::CommandService;

/// Answers the terminal handshake with carrier and server assignments.
///
/// `sign` and `timestamp` are accepted as-is; verifying them belongs to an
/// auth layer in front of this service.
pub struct LoginService {
    carrier_code: String,
    server_list: String,
    clock: Arc<dyn Clock>,
}

impl LoginService {
    pub fn new(terminal: &TerminalSection, clock: Arc<dyn Clock>) -> Self {
        Self {
            carrier_code: terminal.carrier_code.clone(),
            server_list: terminal.server_list.clone(),
            clock,
        }
    }

    pub fn respond(&self, req: LoginCommand) -> LoginResult {
        LoginResult {
            cmd: ack_cmd(&req.cmd),
            vmc_no: req.vmc_no,
            carrier_code: self.carrier_code.clone(),
            date_time: self.clock.now_formatted(),
            server_list: self.server_list.clone(),
            ret: 0,
        }
    }
}

#[async_trait]
impl CommandService for LoginService {
    fn kind(&self) -> CommandKind {
        CommandKind::Login
    }

    async fn handle(&self, frame: Bytes) -> Result<Reply> {
        let req: LoginCommand = decode_command(self.kind(), &frame)?;
        tracing::info!(
            vmc_no = req.vmc_no,
            comp_id = req.comp_id,
            login_count = req.login_count,
            version = %req.version,
            "terminal login"
        );
        Ok(self.respond(req).into())
    }
}
