//! Dispatcher module exports.
//!
//! Re-exports the dispatcher and the command service trait so downstream
//! consumers can depend on this module directly.

pub mod dispatcher;

pub use dispatcher::{CommandService, Dispatcher};
