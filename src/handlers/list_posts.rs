use tracing::warn;

use crate::client::KnowledgeBase;
use crate::format;
use crate::protocol::{ListPostsParams, ToolResult};

/// Handle a `list_posts` tool call.
///
/// An empty `topicId` is treated the same as an absent one.
pub async fn handle(params: ListPostsParams, kb: &dyn KnowledgeBase) -> ToolResult {
    let topic_id = params
        .topic_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());

    let heading = match topic_id {
        Some(id) => format!("Posts in topic {id}"),
        None => "Posts".to_string(),
    };

    match kb.list_posts(topic_id).await {
        Ok(page) => ToolResult::text(format::page(&heading, &page)),
        Err(err) => {
            warn!(tool = "list_posts", error = %err, "tool call failed");
            err.into()
        }
    }
}
