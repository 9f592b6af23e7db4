//! TCP transport: accept loop and the one-shot terminal exchange.
//!
//! Responsibilities:
//! - Accept connections and spawn one task each (the loop never waits on a
//!   connection).
//! - Read one request, frame it, route it, write exactly one reply.
//! - Decode failures are answered with `{"error": ...}`; every other failure
//!   (no JSON, unknown `cmd`, encode/write errors) closes silently.
//!
//! Connection lifecycle:
//! `Reading -> Framed -> Decoded -> {Login | Payment | Unrouted} -> Responded -> Closed`.
//! There is no loop back to `Reading`; the socket is dropped on every path.

use std::net::SocketAddr;

use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::Duration;
use tracing::Instrument;

use vmcd_core::error::{ErrorKind, ReplyPolicy, Result, VmcError};
use vmcd_core::protocol::frame::{probe, FrameProbe};
use vmcd_core::protocol::json::frame_text;
use vmcd_core::protocol::response::{encode_reply, ErrorResult, Reply};

use crate::app_state::AppState;
use crate::config::{FramingMode, GatewaySection};
use crate::transport::codec::{decode, Inbound};

const ACCEPT_BACKOFF: Duration = Duration::from_millis(50);

// --------------------
// Accept loop
// --------------------
pub async fn serve(listener: TcpListener, app: AppState) -> Result<()> {
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!(error = %e, "accept failed");
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };

        let span = tracing::info_span!("conn", %peer);
        tokio::spawn(handle_connection(app.clone(), stream, peer).instrument(span));
    }
}

pub async fn handle_connection(app: AppState, mut stream: TcpStream, peer: SocketAddr) {
    tracing::debug!(%peer, "terminal connected");

    match run_exchange(&app, &mut stream).await {
        Ok(()) => tracing::debug!("exchange complete"),
        Err(e) => log_failure(&e),
    }
    // stream dropped here: connection closed on every path
}

fn log_failure(e: &VmcError) {
    match e.kind() {
        ErrorKind::Unrouted => tracing::info!(error = %e, "unknown command, closing"),
        ErrorKind::Encode => tracing::error!(error = %e, "reply not produced"),
        ErrorKind::TransportRead
        | ErrorKind::Framing
        | ErrorKind::Decode
        | ErrorKind::Write
        | ErrorKind::Config => tracing::warn!(kind = e.kind().as_str(), error = %e, "exchange failed"),
    }
}

// --------------------
// One exchange
// --------------------

/// Read one request from `stream`, answer it, and return the failure (if
/// any) after the peer has been told whatever it is owed.
pub async fn run_exchange<S>(app: &AppState, stream: &mut S) -> Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let raw = read_request(stream, &app.cfg().gateway).await?;
    tracing::debug!(len = raw.len(), raw = %String::from_utf8_lossy(&raw), "request read");

    let reply = match process(app, raw).await {
        Ok(reply) => reply,
        Err(e) => {
            if let ReplyPolicy::ErrorResult(msg) = e.reply_policy() {
                send_error(stream, msg).await;
            }
            return Err(e);
        }
    };

    write_reply(stream, &reply).await
}

/// Frame, decode, and route one raw request.
pub async fn process(app: &AppState, raw: Bytes) -> Result<Reply> {
    let Inbound { env, frame } = decode(raw)?;
    tracing::debug!(json = %frame_text(&frame), "json frame extracted");
    tracing::info!(cmd = %env.cmd, "command received");
    app.dispatcher().dispatch(&env, frame).await
}

// --------------------
// Read side
// --------------------
async fn read_request<S>(stream: &mut S, gw: &GatewaySection) -> Result<Bytes>
where
    S: AsyncRead + Unpin,
{
    let read = read_frame(stream, gw.read_buf_bytes, gw.framing);
    match gw.read_timeout_ms {
        Some(ms) => tokio::time::timeout(Duration::from_millis(ms), read)
            .await
            .map_err(|_| VmcError::TransportRead(format!("read timed out after {ms}ms")))?,
        None => read.await,
    }
}

/// `SingleRead` returns whatever the first read produced. `Accumulate` keeps
/// reading until the object parses (or can never parse), the peer half-closes,
/// or `cap` bytes are buffered.
async fn read_frame<S>(stream: &mut S, cap: usize, mode: FramingMode) -> Result<Bytes>
where
    S: AsyncRead + Unpin,
{
    let mut buf = vec![0u8; cap];
    let mut filled = 0;

    loop {
        let n = stream
            .read(&mut buf[filled..])
            .await
            .map_err(|e| VmcError::TransportRead(e.to_string()))?;

        if n == 0 {
            if filled == 0 {
                return Err(VmcError::TransportRead("peer closed before sending".into()));
            }
            break;
        }
        filled += n;

        if mode == FramingMode::SingleRead || filled == cap {
            break;
        }
        match probe(&buf[..filled]) {
            FrameProbe::Complete | FrameProbe::Invalid => break,
            FrameProbe::NoStart | FrameProbe::Incomplete => {}
        }
    }

    buf.truncate(filled);
    Ok(Bytes::from(buf))
}

// --------------------
// Write side
// --------------------
async fn write_reply<S>(stream: &mut S, reply: &Reply) -> Result<()>
where
    S: AsyncWrite + Unpin,
{
    let out = encode_reply(reply)?;
    stream
        .write_all(&out)
        .await
        .map_err(|e| VmcError::Write(e.to_string()))?;
    stream
        .flush()
        .await
        .map_err(|e| VmcError::Write(e.to_string()))?;
    tracing::debug!(reply = %String::from_utf8_lossy(&out), "reply sent");
    Ok(())
}

/// Best-effort error reply; failures are logged and swallowed.
async fn send_error<S>(stream: &mut S, msg: &str)
where
    S: AsyncWrite + Unpin,
{
    let reply = Reply::from(ErrorResult::new(msg));
    if let Err(e) = write_reply(stream, &reply).await {
        tracing::warn!(error = %e, "error reply not delivered");
    }
}
