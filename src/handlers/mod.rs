pub mod get_post;
pub mod list_posts;
pub mod search_posts;
pub mod update_post;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use crate::client::KnowledgeBase;
use crate::protocol::{
    InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse, McpErrorCode,
    McpErrorResponse, ToolCallParams, ToolResult,
};
use crate::schema;
use crate::tools::{self, ToolDef};

/// MCP protocol revision this server speaks.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub async fn dispatch(req: &JsonRpcRequest, kb: &dyn KnowledgeBase) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => {
            if let Some(params) = req
                .params
                .as_ref()
                .and_then(|v| serde_json::from_value::<InitializeParams>(v.clone()).ok())
            {
                let client = params.client_info.as_ref();
                info!(
                    protocol_version = params.protocol_version.as_deref().unwrap_or("unknown"),
                    client_name = client.and_then(|c| c.name.as_deref()).unwrap_or("unknown"),
                    client_version = client.and_then(|c| c.version.as_deref()).unwrap_or("unknown"),
                    "client initializing"
                );
            }

            let result = serde_json::json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "mcp-slab-server",
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "notifications/initialized" => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        "tools/list" => {
            let result = serde_json::json!({ "tools": tools::definitions() });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "tools/call" => {
            let params: ToolCallParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            McpErrorResponse::new(
                                McpErrorCode::InvalidArguments,
                                format!("Invalid tools/call params: {e}"),
                            )
                            .into(),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for tools/call"),
                    ));
                }
            };

            let tool_result = dispatch_tool_call(&params, kb).await;
            let response = match serde_json::to_value(&tool_result) {
                Ok(result) => JsonRpcResponse::success(req.id.clone(), result),
                Err(e) => JsonRpcResponse::error(
                    req.id.clone(),
                    JsonRpcError::internal_error(format!("Cannot serialize tool result: {e}")),
                ),
            };
            Some(response)
        }

        // Other notifications never get a response.
        _ if req.id.is_none() => None,

        _ => Some(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        )),
    }
}

/// Route a `tools/call` to its handler.
///
/// Never fails: every error is reported as a tool result with `isError`.
pub async fn dispatch_tool_call(params: &ToolCallParams, kb: &dyn KnowledgeBase) -> ToolResult {
    let Some(tool) = tools::find(&params.name) else {
        warn!(tool = %params.name, "unknown tool");
        return McpErrorResponse::new(
            McpErrorCode::UnknownTool,
            format!("Unknown tool: {}", params.name),
        )
        .into();
    };

    match tool.name {
        tools::GET_POST => match parse_arguments(&tool, params.arguments.as_ref()) {
            Ok(args) => get_post::handle(args, kb).await,
            Err(err) => err,
        },
        tools::UPDATE_POST => match parse_arguments(&tool, params.arguments.as_ref()) {
            Ok(args) => update_post::handle(args, kb).await,
            Err(err) => err,
        },
        tools::SEARCH_POSTS => match parse_arguments(&tool, params.arguments.as_ref()) {
            Ok(args) => search_posts::handle(args, kb).await,
            Err(err) => err,
        },
        tools::LIST_POSTS => match parse_arguments(&tool, params.arguments.as_ref()) {
            Ok(args) => list_posts::handle(args, kb).await,
            Err(err) => err,
        },
        other => McpErrorResponse::new(McpErrorCode::UnknownTool, format!("Unknown tool: {other}"))
            .into(),
    }
}

/// Validate `arguments` against the tool's input schema, then deserialize.
///
/// Absent arguments are validated as an empty object.
fn parse_arguments<T>(tool: &ToolDef, arguments: Option<&Value>) -> Result<T, ToolResult>
where
    T: DeserializeOwned,
{
    let empty = Value::Object(Default::default());
    let arguments = arguments.unwrap_or(&empty);

    let invalid = |detail: String| -> ToolResult {
        warn!(tool = tool.name, %detail, "invalid tool arguments");
        McpErrorResponse::new(
            McpErrorCode::InvalidArguments,
            format!("Invalid arguments for {}: {detail}", tool.name),
        )
        .into()
    };

    schema::validate(&tool.input_schema, arguments).map_err(|e| invalid(e.to_string()))?;
    serde_json::from_value(arguments.clone()).map_err(|e| invalid(e.to_string()))
}
