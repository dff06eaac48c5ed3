pub mod request;
pub mod response;

pub use request::{
    GetPostParams, InitializeParams, JsonRpcRequest, ListPostsParams, RpcId, SearchPostsParams,
    ToolCallParams, UpdatePostParams,
};
pub use response::{
    JsonRpcError, JsonRpcResponse, McpError, McpErrorCode, McpErrorResponse, ToolResult,
    ToolResultContent,
};
