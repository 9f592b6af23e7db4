//! Frame extraction from a raw read buffer (panic-free).
//!
//! Terminals may prepend a fixed-length, non-JSON header to the payload.
//! Rather than parsing any particular header format, the extractor skips to
//! the first `{` byte and treats the rest of the buffer as the candidate JSON
//! object. A `{` inside the preamble is not distinguished from the real
//! object start.

use bytes::Bytes;
use serde::de::IgnoredAny;

use crate::error::{Result, VmcError};
use crate::protocol::json::frame_text;

/// Historical read cap of the terminal protocol.
pub const DEFAULT_READ_CAP: usize = 1024;

const OBJECT_START: u8 = b'{';

/// Offset of the first object start byte, if any.
pub fn json_start(buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&b| b == OBJECT_START)
}

/// Return the candidate JSON bytes: everything from the first `{` to the end
/// of `buf` (zero-copy).
pub fn extract_frame(buf: Bytes) -> Result<Bytes> {
    let start = json_start(&buf).ok_or(VmcError::Framing)?;
    tracing::trace!(preamble_len = start, "json object located");
    Ok(buf.slice(start..))
}

/// Completeness of the bytes collected so far, for accumulating reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameProbe {
    /// No `{` seen yet.
    NoStart,
    /// Object started but the JSON text ended early.
    Incomplete,
    /// Parses as one complete JSON value.
    Complete,
    /// Syntax error that more bytes cannot fix.
    Invalid,
}

/// Check whether `buf` already holds a complete JSON object.
pub fn probe(buf: &[u8]) -> FrameProbe {
    let Some(start) = json_start(buf) else {
        return FrameProbe::NoStart;
    };
    match serde_json::from_str::<IgnoredAny>(&frame_text(&buf[start..])) {
        Ok(_) => FrameProbe::Complete,
        Err(e) if e.is_eof() => FrameProbe::Incomplete,
        Err(_) => FrameProbe::Invalid,
    }
}
