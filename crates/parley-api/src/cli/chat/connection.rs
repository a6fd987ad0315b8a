//! Client connection management: dial retry and call plumbing.
//!
//! A connection is one TCP stream framed into newline-delimited JSON lines.
//! Framing is unbounded on the client: a reply carries the full history,
//! which grows without limit, so no line length is a safe cap here. Only
//! the server bounds its (request) read direction.
//!
//! Dialing retries with exponential backoff; a failed call leaves the stream
//! in an unknown state, so callers drop the connection and re-establish
//! before the next call.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_util::codec::{Framed, LinesCodec, LinesCodecError};
use tracing::warn;

use parley_types::error::{CallError, WireError};
use parley_types::wire::{MAX_LINE_BYTES, Request, Response};

/// Maximum number of dial attempts before giving up.
const MAX_DIAL_ATTEMPTS: u32 = 5;

/// Initial backoff delay; doubles after each failed attempt.
const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

/// One live connection to the chat server.
pub struct ChatConnection {
    framed: Framed<TcpStream, LinesCodec>,
}

impl ChatConnection {
    /// Dial the server, retrying with exponential backoff.
    pub async fn connect_with_retry(addr: &str) -> Result<Self, CallError> {
        let mut backoff = INITIAL_BACKOFF;
        let mut last_error = String::new();

        for attempt in 1..=MAX_DIAL_ATTEMPTS {
            match TcpStream::connect(addr).await {
                Ok(stream) => {
                    return Ok(Self {
                        framed: Framed::new(stream, LinesCodec::new()),
                    });
                }
                Err(e) => {
                    warn!(
                        %addr,
                        attempt,
                        error = %e,
                        backoff_secs = backoff.as_secs(),
                        "dial failed; retrying"
                    );
                    last_error = e.to_string();
                    tokio::time::sleep(backoff).await;
                    backoff *= 2;
                }
            }
        }

        Err(CallError::Connect(last_error))
    }

    /// Issue one request and wait for its reply.
    ///
    /// On any error the connection must be discarded by the caller.
    pub async fn call(&mut self, request: &Request) -> Result<Response, CallError> {
        let payload =
            serde_json::to_string(request).map_err(|e| WireError::Malformed(e.to_string()))?;
        self.framed.send(payload).await.map_err(into_wire_error)?;

        match self.framed.next().await {
            Some(Ok(line)) => {
                let response =
                    serde_json::from_str(&line).map_err(|e| WireError::Malformed(e.to_string()))?;
                Ok(response)
            }
            Some(Err(e)) => Err(into_wire_error(e).into()),
            None => Err(WireError::ConnectionClosed.into()),
        }
    }
}

fn into_wire_error(e: LinesCodecError) -> WireError {
    match e {
        // Unreachable with an unbounded client codec; kept for totality.
        LinesCodecError::MaxLineLengthExceeded => WireError::LineTooLong(MAX_LINE_BYTES),
        LinesCodecError::Io(e) => WireError::Io(e),
    }
}
