//! Built-in terminal command services.

pub mod login;
pub mod qrcode;

pub use login::LoginService;
pub use qrcode::QrPaymentService;
