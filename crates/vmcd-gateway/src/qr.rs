//! QR-code generation seam.
//!
//! Real code generation lives outside this process. The gateway only needs
//! an opaque string per order and never inspects its format.

use async_trait::async_trait;

use vmcd_core::error::{Result, VmcError};

/// Order metadata handed to the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrOrder {
    pub order_no: String,
    pub product_id: i64,
    pub amount: i64,
    pub qr_type: String,
    pub vmc_no: i64,
}

#[async_trait]
pub trait QrCodeProvider: Send + Sync {
    async fn generate(&self, order: &QrOrder) -> Result<String>;
}

/// Returns the same configured placeholder for every order.
#[derive(Debug, Clone)]
pub struct StubQrProvider {
    code: String,
}

impl StubQrProvider {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

#[async_trait]
impl QrCodeProvider for StubQrProvider {
    async fn generate(&self, order: &QrOrder) -> Result<String> {
        if self.code.is_empty() {
            return Err(VmcError::Encode(format!(
                "no qr code for order {}",
                order.order_no
            )));
        }
        Ok(self.code.clone())
    }
}
