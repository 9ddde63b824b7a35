//! MCP server loop over the stdio transport.
//!
//! Lines are fed to a `FrameAssembler`; every completed JSON value is
//! handed to its own task so a slow outbound call never blocks reading.
//! Tasks send their responses back over a channel and only the loop
//! itself writes to the transport, which keeps each frame contiguous.

use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use meeta_mcp::{JsonRpcOutput, McpHandler};

use crate::assembler::FrameAssembler;
use crate::error::TransportError;
use crate::transport::StdioTransport;

/// MCP server that reads from a transport and dispatches to a handler.
pub struct McpServer<R, W> {
    transport: StdioTransport<R, W>,
    handler: McpHandler,
    assembler: FrameAssembler,
}

enum Event {
    Line(Option<String>),
    Output(Option<JsonRpcOutput>),
}

impl<R, W> McpServer<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new server with the given transport and handler.
    pub fn new(transport: StdioTransport<R, W>, handler: McpHandler) -> Self {
        Self {
            transport,
            handler,
            assembler: FrameAssembler::new(),
        }
    }

    /// Runs the server loop until input is closed and every in-flight
    /// request has been answered.
    ///
    /// Must be called from within a tokio runtime; requests are spawned
    /// as tasks.
    pub async fn run(&mut self) -> Result<(), TransportError> {
        info!("MCP server starting on stdio");

        let (tx, mut rx) = mpsc::unbounded_channel::<JsonRpcOutput>();
        let mut tx = Some(tx);

        loop {
            let event = tokio::select! {
                line = self.transport.read_line(), if tx.is_some() => Event::Line(line?),
                output = rx.recv() => Event::Output(output),
            };

            match event {
                Event::Line(Some(line)) => {
                    if let (Some(message), Some(sender)) = (self.assembler.push_line(&line), &tx) {
                        self.spawn_request(message, sender.clone());
                    }
                }
                Event::Line(None) => {
                    info!("stdin closed, waiting for in-flight requests");
                    // Dropping the last loop-held sender lets `recv` end once
                    // every spawned task has reported.
                    tx = None;
                }
                Event::Output(Some(output)) => self.write_output(&output).await?,
                Event::Output(None) => {
                    info!("all requests answered, shutting down");
                    return Ok(());
                }
            }
        }
    }

    fn spawn_request(&self, message: Value, sender: mpsc::UnboundedSender<JsonRpcOutput>) {
        let handler = self.handler.clone();
        tokio::spawn(async move {
            if let Some(output) = handler.handle_message(message).await {
                if sender.send(output).is_err() {
                    debug!("server loop gone, dropping response");
                }
            }
        });
    }

    /// Serializes and writes a JSON-RPC output to the transport.
    async fn write_output(&mut self, output: &JsonRpcOutput) -> Result<(), TransportError> {
        match output.to_json() {
            Ok(json) => self.transport.write_frame(&json).await,
            Err(e) => {
                error!(error = %e, "failed to serialize response");
                Err(TransportError::Write(e.to_string()))
            }
        }
    }
}
