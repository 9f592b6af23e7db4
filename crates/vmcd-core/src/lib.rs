//! vmcd core: transport-agnostic protocol primitives and the error taxonomy.
//!
//! This crate defines the wire-level contracts shared by the terminal
//! gateway and its tests: how a command frame is located inside a raw read
//! buffer, the command envelope, the per-command request/response shapes,
//! and the error surface. It carries no runtime dependencies so it can be
//! driven from any transport.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Malformed terminal
//! input always surfaces as a `VmcError`, never as a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{Result, VmcError};
