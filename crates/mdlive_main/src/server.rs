//! Demo streaming transport: a toy SSE server that emits a sample
//! Markdown document a few characters per tick, then terminates.
//!
//! Endpoints mirror a minimal chat backend: `/api/stream-markdown`
//! (the event stream), `/api/health`, and `/api/info`. Every response
//! carries permissive CORS headers so a browser demo can connect from
//! anywhere.

use std::io::{self, Read};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use serde_json::{Value, json};
use tiny_http::{Header, Request, Response, Server, StatusCode};

/// The Markdown document the demo stream emits.
pub const SAMPLE_DOCUMENT: &str = include_str!("sample.md");

/// Run the demo server until the process is killed.
pub fn run(port: u16, interval: Duration) -> Result<()> {
    let server = Server::http(("0.0.0.0", port))
        .map_err(|error| anyhow::anyhow!("Failed to bind port {port}: {error}"))?;
    tracing::info!(port, "Demo stream server listening");

    for request in server.incoming_requests() {
        let url = request.url().to_string();
        match url.as_str() {
            "/api/stream-markdown" => {
                tracing::info!(peer = ?request.remote_addr(), "New stream connection");
                thread::spawn(move || {
                    let stream = EventStream::new(SAMPLE_DOCUMENT, interval);
                    let response =
                        Response::new(StatusCode(200), stream_headers(), stream, None, None);
                    // A client hanging up mid-stream is normal.
                    if let Err(error) = request.respond(response) {
                        tracing::debug!(error = %error, "Stream connection closed early");
                    }
                });
            }
            "/api/health" => respond_json(
                request,
                json!({
                    "status": "ok",
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                }),
            ),
            "/api/info" => respond_json(
                request,
                json!({
                    "name": "mdlive demo stream server",
                    "version": env!("CARGO_PKG_VERSION"),
                    "endpoints": {
                        "stream": "/api/stream-markdown",
                        "health": "/api/health",
                        "info": "/api/info",
                    },
                }),
            ),
            _ => {
                tracing::debug!(url = %url, "Not found");
                let _ = request.respond(Response::empty(404).with_header(cors_header()));
            }
        }
    }
    Ok(())
}

fn respond_json(request: Request, body: Value) {
    let response = Response::from_string(body.to_string())
        .with_header(header("Content-Type", "application/json"))
        .with_header(cors_header());
    if let Err(error) = request.respond(response) {
        tracing::debug!(error = %error, "Failed to send response");
    }
}

fn header(name: &str, value: &str) -> Header {
    // Infallible for the static names/values used here.
    Header::from_bytes(name.as_bytes(), value.as_bytes()).unwrap()
}

fn cors_header() -> Header {
    header("Access-Control-Allow-Origin", "*")
}

fn stream_headers() -> Vec<Header> {
    vec![
        header("Content-Type", "text/event-stream"),
        header("Cache-Control", "no-cache"),
        cors_header(),
        header("Access-Control-Allow-Headers", "Cache-Control"),
    ]
}

/// State machine of the emitted event sequence.
enum Stage {
    Connected,
    Content,
    Done,
    Closed,
}

/// Produces the SSE byte stream lazily as `tiny_http` pulls from it.
///
/// Frame order: one `connected` event, then `content` events carrying
/// 1 to 3 characters each (chunk sizes cycle deterministically), then
/// one `done` event and end of stream. Each content pull sleeps for
/// the configured interval first, which gives the typewriter pacing.
pub struct EventStream {
    chars: Vec<char>,
    cursor: usize,
    chunk_size: usize,
    interval: Duration,
    stage: Stage,
    pending: Vec<u8>,
    offset: usize,
}

impl EventStream {
    pub fn new(content: &str, interval: Duration) -> Self {
        Self {
            chars: content.chars().collect(),
            cursor: 0,
            chunk_size: 1,
            interval,
            stage: Stage::Connected,
            pending: Vec::new(),
            offset: 0,
        }
    }

    fn next_frame(&mut self) -> Option<String> {
        match self.stage {
            Stage::Connected => {
                self.stage = Stage::Content;
                Some(frame(&json!({
                    "type": "connected",
                    "message": "stream established",
                })))
            }
            Stage::Content => {
                if self.cursor >= self.chars.len() {
                    self.stage = Stage::Done;
                    return self.next_frame();
                }
                thread::sleep(self.interval);

                let end = (self.cursor + self.chunk_size).min(self.chars.len());
                let chunk: String = self.chars[self.cursor..end].iter().collect();
                self.cursor = end;
                self.chunk_size = self.chunk_size % 3 + 1;

                let progress = self.cursor * 100 / self.chars.len();
                Some(frame(&json!({
                    "type": "content",
                    "content": chunk,
                    "progress": progress,
                })))
            }
            Stage::Done => {
                self.stage = Stage::Closed;
                Some(frame(&json!({
                    "type": "done",
                    "message": "stream complete",
                })))
            }
            Stage::Closed => None,
        }
    }
}

impl Read for EventStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.offset == self.pending.len() {
            match self.next_frame() {
                Some(next) => {
                    self.pending = next.into_bytes();
                    self.offset = 0;
                }
                None => return Ok(0),
            }
        }
        let n = (self.pending.len() - self.offset).min(buf.len());
        buf[..n].copy_from_slice(&self.pending[self.offset..self.offset + n]);
        self.offset += n;
        Ok(n)
    }
}

fn frame(payload: &Value) -> String {
    format!("data: {payload}\n\n")
}
