use std::io;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;

use super::{RenderResponse, RenderService};
use crate::quote::QuoteProvider;

const MAX_HEAD_BYTES: usize = 16 * 1024;

/// How long a client may take to send its request head.
pub const HEAD_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Read an HTTP/1.1 request head and return `(method, target)`.
///
/// Fails with [`io::ErrorKind::TimedOut`] when the head is not complete within
/// [`HEAD_READ_TIMEOUT`].
pub async fn read_request_target<S>(stream: &mut S) -> io::Result<(String, String)>
where
    S: AsyncRead + Unpin,
{
    read_request_target_within(stream, HEAD_READ_TIMEOUT).await
}

/// [`read_request_target`] with an explicit deadline for the whole head.
pub async fn read_request_target_within<S>(
    stream: &mut S,
    limit: Duration,
) -> io::Result<(String, String)>
where
    S: AsyncRead + Unpin,
{
    tokio::time::timeout(limit, read_head(stream))
        .await
        .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "request head timed out"))?
}

async fn read_head<S>(stream: &mut S) -> io::Result<(String, String)>
where
    S: AsyncRead + Unpin,
{
    let mut head = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        head.extend_from_slice(&chunk[..n]);
        if head.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
        if head.len() > MAX_HEAD_BYTES {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "request head too large",
            ));
        }
    }

    let text = String::from_utf8_lossy(&head);
    let request_line = text.lines().next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(method), Some(target)) => Ok((method.to_string(), target.to_string())),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("malformed request line: {request_line:?}"),
        )),
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// Write `response` and close the exchange.
pub async fn write_response<S>(stream: &mut S, response: &RenderResponse) -> io::Result<()>
where
    S: AsyncWrite + Unpin,
{
    let mut head = format!("HTTP/1.1 {} {}\r\n", response.status, reason(response.status));
    for (name, value) in &response.headers {
        head.push_str(name);
        head.push_str(": ");
        head.push_str(value);
        head.push_str("\r\n");
    }
    head.push_str(&format!("Content-Length: {}\r\n", response.body.len()));
    head.push_str("Connection: close\r\n\r\n");

    stream.write_all(head.as_bytes()).await?;
    stream.write_all(&response.body).await?;
    stream.flush().await
}

/// Accept connections forever, one task per connection.
pub async fn serve<P>(listener: TcpListener, service: Arc<RenderService<P>>) -> io::Result<()>
where
    P: QuoteProvider + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "render endpoint listening");
    }
    loop {
        let (mut socket, peer) = listener.accept().await?;
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            let (method, target) = match read_request_target(&mut socket).await {
                Ok(v) => v,
                Err(e) => {
                    tracing::debug!(%peer, error = %e, "dropping connection");
                    return;
                }
            };

            let response = if method == "GET" || method == "HEAD" {
                let now = chrono::Local::now().naive_local();
                let mut r = service.handle(&target, now).await;
                if method == "HEAD" {
                    r.body.clear();
                }
                r
            } else {
                RenderResponse::text(405, "method not allowed")
            };

            if let Err(e) = write_response(&mut socket, &response).await {
                tracing::warn!(%peer, error = %e, "failed to write response");
            }
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/endpoint/server.rs"]
mod tests;
