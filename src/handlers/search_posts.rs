use tracing::warn;

use crate::client::KnowledgeBase;
use crate::format;
use crate::protocol::{SearchPostsParams, ToolResult};

/// Handle a `search_posts` tool call.
pub async fn handle(params: SearchPostsParams, kb: &dyn KnowledgeBase) -> ToolResult {
    match kb.search_posts(&params.query, params.limit).await {
        Ok(page) => ToolResult::text(format::page(
            &format!("Search results for \"{}\"", params.query),
            &page,
        )),
        Err(err) => {
            warn!(tool = "search_posts", error = %err, "tool call failed");
            err.into()
        }
    }
}
