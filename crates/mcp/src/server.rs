// MCP server: JSON-RPC 2.0, one message per line over stdio

use crate::codec::{InputLine, MessageCodec};
use crate::protocol::{
    CallToolParams, InitializeParams, InitializeResult, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability,
    DEFAULT_PROTOCOL_VERSION,
};
use crate::tools::{error_message, ToolRegistry};
use anyhow::{Context, Result};
use futures::StreamExt;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio_util::codec::FramedRead;

pub const SERVER_NAME: &str = "estat-mcp";

#[derive(Clone)]
pub struct McpServer {
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Serve on stdin/stdout until stdin is closed
    pub async fn start(&self) -> Result<()> {
        if self.registry.is_empty() {
            tracing::warn!("No tools registered");
        }
        tracing::info!("MCP server listening on stdio");
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await?;
        tracing::info!("stdin closed, MCP server stopped");
        Ok(())
    }

    /// Read requests from `reader` and write responses to `writer`.
    ///
    /// Each request runs on its own task; a single writer task owns the
    /// output so response lines never interleave. Returns once the input is
    /// exhausted and every in-flight request has been answered.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel::<JsonRpcResponse>();
        let writer_task = tokio::spawn(write_responses(writer, rx));

        let mut lines = FramedRead::new(reader, MessageCodec::new());
        while let Some(line) = lines.next().await {
            let line = match line.context("Failed to read from input")? {
                InputLine::Message(line) => line,
                InputLine::Malformed(reason) => {
                    tracing::warn!(reason = %reason, "Received unreadable message");
                    let _ = tx.send(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()));
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            let server = self.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(response) = server.handle_message(&line).await {
                    // Only fails once the writer has stopped.
                    let _ = tx.send(response);
                }
            });
        }

        drop(tx);
        writer_task.await.context("Response writer panicked")?
    }

    /// Handle one raw input line. Returns `None` for notifications.
    pub async fn handle_message(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Received unparseable message");
                return Some(JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()));
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(_) => return Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request())),
        };

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(id, JsonRpcError::invalid_request()));
        }

        self.handle_request(request).await
    }

    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id.clone() else {
            tracing::debug!(method = %request.method, "Notification received");
            return None;
        };

        tracing::debug!(method = %request.method, "Request received");
        let result = match request.method.as_str() {
            "initialize" => self.initialize(request.params),
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => self.list_tools(),
            "tools/call" => self.call_tool(request.params).await,
            other => Err(JsonRpcError::method_not_found(other)),
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    fn initialize(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: InitializeParams = match params {
            Some(params) => serde_json::from_value(params)
                .map_err(|e| JsonRpcError::invalid_params(format!("Invalid initialize params: {}", e)))?,
            None => InitializeParams::default(),
        };

        if let Some(client) = &params.client_info {
            tracing::info!(client = %client.name, version = %client.version, "Client connected");
        }

        to_value(InitializeResult {
            protocol_version: params
                .protocol_version
                .unwrap_or_else(|| DEFAULT_PROTOCOL_VERSION.to_string()),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        })
    }

    fn list_tools(&self) -> Result<Value, JsonRpcError> {
        to_value(ListToolsResult {
            tools: self.registry.list_schemas(),
        })
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, JsonRpcError> {
        let params: CallToolParams = params
            .ok_or_else(|| JsonRpcError::invalid_params("Missing params for tools/call"))
            .and_then(|params| {
                serde_json::from_value(params).map_err(|e| {
                    JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", e))
                })
            })?;

        let result = match self.registry.get(&params.name) {
            Some(tool) => {
                tracing::info!(tool = %params.name, "Calling tool");
                match tool.execute(params.arguments).await {
                    Ok(result) => Ok(result),
                    Err(e) => {
                        tracing::error!(tool = %params.name, error = %e, "Tool execution failed");
                        error_message(format!("{:#}", e))
                    }
                }
            }
            None => {
                tracing::warn!(tool = %params.name, "Unknown tool requested");
                error_message(format!("Unknown tool: {}", params.name))
            }
        };

        let result = result.map_err(|e| JsonRpcError::internal_error(e.to_string()))?;
        to_value(result)
    }
}

fn to_value(value: impl Serialize) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(|e| JsonRpcError::internal_error(e.to_string()))
}

async fn write_responses<W>(mut writer: W, mut rx: mpsc::UnboundedReceiver<JsonRpcResponse>) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let mut line = serde_json::to_string(&response).context("Failed to serialize response")?;
        line.push('\n');
        writer
            .write_all(line.as_bytes())
            .await
            .context("Failed to write response")?;
        writer.flush().await.context("Failed to flush output")?;
    }
    Ok(())
}
