// MCP server: line-delimited JSON-RPC over stdio

use crate::dispatcher::Dispatcher;
use crate::protocol::{
    CallToolParams, InitializeParams, InitializeResult, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ServerCapabilities, ServerInfo, ToolsCapability, PROTOCOL_VERSION,
};
use anyhow::{Context, Result};
use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::codec::{AnyDelimiterCodec, AnyDelimiterCodecError, Decoder, FramedRead};
use tracing::{debug, error, info, warn};

const SERVER_NAME: &str = "pkgdocs-mcp";

/// Longest accepted request line, in bytes.
pub const DEFAULT_MAX_MESSAGE_BYTES: usize = 8 * 1024 * 1024;

const INSTRUCTIONS: &str = "Use package_search to find packages that fit a need, then \
                            package_doc_search to read the documentation of a specific package.";

/// One newline-delimited frame of input.
enum Frame {
    Message(Bytes),
    /// A line over the size limit. The codec skips the rest of it.
    TooLong,
}

/// Splits input on `\n` without requiring UTF-8, so a bad line reaches the
/// JSON parser (and gets a parse error) instead of ending the stream.
struct MessageCodec {
    inner: AnyDelimiterCodec,
}

impl MessageCodec {
    fn new(max_length: usize) -> Self {
        Self {
            inner: AnyDelimiterCodec::new_with_max_length(
                b"\n".to_vec(),
                b"\n".to_vec(),
                max_length,
            ),
        }
    }

    fn frame(
        chunk: Result<Option<Bytes>, AnyDelimiterCodecError>,
    ) -> Result<Option<Frame>, AnyDelimiterCodecError> {
        match chunk {
            Ok(chunk) => Ok(chunk.map(Frame::Message)),
            Err(AnyDelimiterCodecError::MaxChunkLengthExceeded) => Ok(Some(Frame::TooLong)),
            Err(e) => Err(e),
        }
    }
}

impl Decoder for MessageCodec {
    type Item = Frame;
    type Error = AnyDelimiterCodecError;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Frame>, Self::Error> {
        Self::frame(self.inner.decode(buf))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Frame>, Self::Error> {
        Self::frame(self.inner.decode_eof(buf))
    }
}

pub struct McpServer {
    dispatcher: Arc<Dispatcher>,
    max_message_bytes: usize,
}

impl McpServer {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
        }
    }

    /// Lines longer than `max` bytes are answered with a parse error and
    /// skipped.
    pub fn with_max_message_bytes(mut self, max: usize) -> Self {
        self.max_message_bytes = max;
        self
    }

    /// Serve on the process's stdin/stdout until stdin closes.
    pub async fn start(&self) -> Result<()> {
        info!("MCP server listening on stdio");
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve requests read line by line from `reader`, writing one response
    /// line per request to `writer`.
    ///
    /// Each request runs on its own task. Responses go through a single
    /// writer task, so they may be written out of request order but never
    /// interleave. A line that is not valid JSON (including invalid UTF-8)
    /// or is over the size limit gets a parse error and the session goes
    /// on. Returns once the input is exhausted and every in-flight request
    /// has been answered.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let mut frames = FramedRead::new(reader, MessageCodec::new(self.max_message_bytes));
        let (tx, mut rx) = mpsc::unbounded_channel::<JsonRpcResponse>();

        let writer_task = tokio::spawn(async move {
            let mut writer = writer;
            while let Some(response) = rx.recv().await {
                let mut line = match serde_json::to_string(&response) {
                    Ok(line) => line,
                    Err(e) => {
                        error!(error = %e, "Failed to serialize response");
                        continue;
                    }
                };
                line.push('\n');
                writer.write_all(line.as_bytes()).await?;
                writer.flush().await?;
            }
            Ok::<_, std::io::Error>(())
        });

        let mut in_flight = JoinSet::new();
        while let Some(frame) = frames.next().await {
            let line = match frame {
                Ok(Frame::Message(line)) => line,
                Ok(Frame::TooLong) => {
                    warn!(limit = self.max_message_bytes, "Request line too long, skipping it");
                    let _ = tx.send(JsonRpcResponse::error(
                        Value::Null,
                        JsonRpcError::parse_error(),
                    ));
                    continue;
                }
                Err(e) => {
                    error!(error = %e, "Failed to read request line");
                    break;
                }
            };
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            let dispatcher = self.dispatcher.clone();
            let tx = tx.clone();
            in_flight.spawn(async move {
                if let Some(response) = handle_message(&dispatcher, &line).await {
                    // Receiver only goes away if the writer failed, which is reported below
                    let _ = tx.send(response);
                }
            });

            // Reap finished requests so the set does not grow with the session
            while let Some(joined) = in_flight.try_join_next() {
                if let Err(e) = joined {
                    error!(error = %e, "Request task failed");
                }
            }
        }

        while let Some(joined) = in_flight.join_next().await {
            if let Err(e) = joined {
                error!(error = %e, "Request task failed");
            }
        }
        drop(tx);

        writer_task
            .await
            .context("Writer task panicked")?
            .context("Failed to write response")?;

        info!("Input closed, MCP server stopping");
        Ok(())
    }
}

/// Handle one raw JSON-RPC message. Returns `None` for notifications and
/// for responses sent by the client.
pub async fn handle_message(dispatcher: &Dispatcher, line: &[u8]) -> Option<JsonRpcResponse> {
    let value: Value = match serde_json::from_slice(line) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Malformed JSON-RPC message");
            return Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()));
        }
    };

    // Replies to server-initiated requests; this server never sends any
    if value.get("method").is_none()
        && (value.get("result").is_some() || value.get("error").is_some())
    {
        debug!("Ignoring client response message");
        return None;
    }

    let id = value.get("id").cloned();
    let request = match serde_json::from_value::<JsonRpcRequest>(value) {
        Ok(request) if request.jsonrpc == "2.0" => request,
        _ => {
            warn!("Invalid JSON-RPC request");
            return Some(JsonRpcResponse::error(
                id.unwrap_or(Value::Null),
                JsonRpcError::invalid_request(),
            ));
        }
    };

    let Some(id) = request.id.clone() else {
        debug!(method = %request.method, "Received notification");
        return None;
    };

    debug!(method = %request.method, "Received request");
    let response = match request.method.as_str() {
        "initialize" => JsonRpcResponse::from_result(id, &initialize(request.params)),
        "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
        "tools/list" => JsonRpcResponse::from_result(id, &dispatcher.list_tools()),
        "tools/call" => {
            let params = request
                .params
                .ok_or_else(|| "missing params".to_string())
                .and_then(|p| {
                    serde_json::from_value::<CallToolParams>(p).map_err(|e| e.to_string())
                });
            match params {
                Ok(params) => JsonRpcResponse::from_result(id, &dispatcher.handle(params).await),
                Err(e) => JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params(format!("Invalid params: {}", e)),
                ),
            }
        }
        other => JsonRpcResponse::error(id, JsonRpcError::method_not_found(other)),
    };
    Some(response)
}

fn initialize(params: Option<Value>) -> InitializeResult {
    match params.map(serde_json::from_value::<InitializeParams>) {
        Some(Ok(params)) => info!(
            client = %params.client_info.name,
            client_version = %params.client_info.version,
            protocol_version = %params.protocol_version,
            "Client connected"
        ),
        _ => info!("Client connected"),
    }

    InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {
                list_changed: false,
            }),
        },
        server_info: ServerInfo {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        instructions: Some(INSTRUCTIONS.to_string()),
    }
}
