//! Terminal protocol modules.
//!
//! A request travels through three stages, each in its own module:
//! - `frame`: locate the JSON object inside a raw read buffer.
//! - `envelope`: decode just enough (`cmd`) to route.
//! - `command` / `response`: the per-command request and reply shapes.
//!
//! `json` holds the lenient decoding rules both decoding stages share.
//!
//! All parsers are panic-free: malformed input is reported as `VmcError`.

pub mod command;
pub mod envelope;
pub mod frame;
pub mod json;
pub mod response;
