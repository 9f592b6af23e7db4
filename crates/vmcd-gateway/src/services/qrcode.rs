use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use vmcd_core::error::Result;
use vmcd_core::protocol::command::{ack_cmd, decode_command, CommandKind, PaymentCommand};
use vmcd_core::protocol::response::{PaymentResult, Reply};

use crate::dispatch::CommandService;
use crate::qr::{QrCodeProvider, QrOrder};

/// Issues a payment QR code for a vending order.
pub struct QrPaymentService {
    qr: Arc<dyn QrCodeProvider>,
}

impl QrPaymentService {
    pub fn new(qr: Arc<dyn QrCodeProvider>) -> Self {
        Self { qr }
    }
}

#[async_trait]
impl CommandService for QrPaymentService {
    fn kind(&self) -> CommandKind {
        CommandKind::QrPayment
    }

    async fn handle(&self, frame: Bytes) -> Result<Reply> {
        let req: PaymentCommand = decode_command(self.kind(), &frame)?;

        let order = QrOrder {
            order_no: req.order_no.clone(),
            product_id: req.product_id,
            amount: req.amount,
            qr_type: req.qr_type.clone(),
            vmc_no: req.vmc_no,
        };
        let qrcode = self.qr.generate(&order).await?;

        tracing::info!(
            vmc_no = req.vmc_no,
            order_no = %req.order_no,
            product_id = req.product_id,
            amount = req.amount,
            "qr payment issued"
        );

        Ok(PaymentResult {
            cmd: ack_cmd(&req.cmd),
            vmc_no: req.vmc_no,
            qr_type: req.qr_type,
            qrcode,
            order_no: req.order_no,
        }
        .into())
    }
}
