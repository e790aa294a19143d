//! Line-oriented JSON-RPC 2.0 front end for a [`ToolTable`].
//!
//! One request per line in, at most one response line out.  Speaks the
//! subset of the MCP tool protocol the device needs: `initialize`, `ping`,
//! `tools/list` and `tools/call`.

use log::warn;
use serde_json::{Value, json};

use super::ToolTable;

const PROTOCOL_VERSION: &str = "2024-11-05";

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;

pub struct Console {
    tools: ToolTable,
}

impl Console {
    pub fn new(tools: ToolTable) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &ToolTable {
        &self.tools
    }

    /// Handle one request line.  Returns `None` for notifications and blank
    /// lines; a notification is still executed.
    pub fn handle_line(&self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let Ok(request) = serde_json::from_str::<Value>(line) else {
            warn!("console: unparseable request");
            return Some(error_response(&Value::Null, PARSE_ERROR, "Parse error"));
        };
        let Some(method) = request.get("method").and_then(Value::as_str) else {
            let id = request.get("id").cloned().unwrap_or(Value::Null);
            return Some(error_response(&id, INVALID_REQUEST, "Invalid request"));
        };
        let params = request.get("params").unwrap_or(&Value::Null);

        let response = match method {
            "initialize" => Ok(json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": {
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                },
            })),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(json!({ "tools": self.tools.list() })),
            "tools/call" => self.call_tool(params),
            other => {
                warn!("console: unknown method '{}'", other);
                Err((METHOD_NOT_FOUND, "Method not found"))
            }
        };

        // Notifications carry no id: run them, but never reply.
        let id = request.get("id")?;
        Some(match response {
            Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }).to_string(),
            Err((code, message)) => error_response(id, code, message),
        })
    }

    fn call_tool(&self, params: &Value) -> Result<Value, (i64, &'static str)> {
        let Some(name) = params.get("name").and_then(Value::as_str) else {
            return Err((INVALID_PARAMS, "Missing tool name"));
        };
        let args = params.get("arguments").unwrap_or(&Value::Null);
        Ok(match self.tools.call(name, args) {
            Ok(value) => json!({
                "content": [{ "type": "text", "text": value.to_text() }],
                "isError": false,
            }),
            Err(e) => json!({
                "content": [{ "type": "text", "text": e.to_string() }],
                "isError": true,
            }),
        })
    }
}

fn error_response(id: &Value, code: i64, message: &str) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": code, "message": message },
    })
    .to_string()
}
