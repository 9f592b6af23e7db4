//! vmcd gateway library entry.
//!
//! This crate wires the TCP transport, the command dispatcher, and the
//! built-in terminal services into one exchange pipeline. It is consumed by
//! the binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod clock;
pub mod config;
pub mod dispatch;
pub mod qr;
pub mod services;
pub mod transport;
