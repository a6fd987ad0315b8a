//! TCP transport for the chat server.
//!
//! Accepts connections and forwards decoded requests to [`ChatHandler`],
//! one spawned task per connection. All connections funnel into the store's
//! single mutual-exclusion domain; the transport itself keeps no state.
//! Wire format is newline-delimited JSON with a bounded line length.

use std::net::SocketAddr;
use std::sync::Arc;

use console::style;
use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_util::codec::{Framed, LinesCodec, LinesCodecError};
use tracing::{debug, warn};

use parley_core::handler::ChatHandler;
use parley_types::wire::{MAX_LINE_BYTES, Request, Response};

/// Bind the listener and serve until Ctrl+C or SIGTERM.
pub async fn serve(addr: &str, handler: Arc<ChatHandler>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;

    println!(
        "  {} Parley server listening on {}",
        style("⚡").bold(),
        style(local).cyan()
    );
    println!("  {}", style("Press Ctrl+C to stop").dim());

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            accepted = listener.accept() => match accepted {
                Ok((stream, peer)) => {
                    let handler = Arc::clone(&handler);
                    tokio::spawn(async move {
                        debug!(%peer, "client connected");
                        handle_connection(stream, peer, handler).await;
                        debug!(%peer, "client disconnected");
                    });
                }
                // Accept failures are transient; keep serving.
                Err(e) => warn!(error = %e, "accept failed"),
            },
        }
    }

    println!("\n  Server stopped.");
    Ok(())
}

/// Serve one connection: decode request lines, dispatch, reply.
///
/// An undecodable line gets an `error` reply and the connection stays open.
/// An oversized line gets an `error` reply and the connection is closed,
/// since the framing state past the bound is unrecoverable.
async fn handle_connection(stream: TcpStream, peer: SocketAddr, handler: Arc<ChatHandler>) {
    let mut framed = Framed::new(stream, LinesCodec::new_with_max_length(MAX_LINE_BYTES));

    while let Some(line) = framed.next().await {
        let line = match line {
            Ok(line) => line,
            Err(LinesCodecError::MaxLineLengthExceeded) => {
                warn!(%peer, "request line too long; closing connection");
                let reply = Response::Error {
                    message: format!("request exceeds {MAX_LINE_BYTES} bytes"),
                };
                let _ = send(&mut framed, &reply).await;
                break;
            }
            Err(LinesCodecError::Io(e)) => {
                debug!(%peer, error = %e, "read failed");
                break;
            }
        };

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => {
                debug!(%peer, op = request.op_name(), "handling request");
                handler.handle(request)
            }
            Err(e) => {
                warn!(%peer, error = %e, "malformed request");
                Response::Error {
                    message: format!("malformed request: {e}"),
                }
            }
        };

        if let Err(e) = send(&mut framed, &response).await {
            debug!(%peer, error = %e, "write failed");
            break;
        }
    }
}

/// Encode and write one reply line.
async fn send(
    framed: &mut Framed<TcpStream, LinesCodec>,
    response: &Response,
) -> Result<(), LinesCodecError> {
    let payload = serde_json::to_string(response).unwrap_or_else(|_| {
        r#"{"status":"error","message":"reply serialization failed"}"#.to_string()
    });
    framed.send(payload).await
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
