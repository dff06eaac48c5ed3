use tracing::warn;

use crate::client::KnowledgeBase;
use crate::format;
use crate::post_id::extract_post_id;
use crate::protocol::{GetPostParams, ToolResult};

/// Handle a `get_post` tool call.
pub async fn handle(params: GetPostParams, kb: &dyn KnowledgeBase) -> ToolResult {
    let id = match extract_post_id(&params.post_id) {
        Ok(id) => id,
        Err(err) => return err.into(),
    };

    match kb.get_post(&id).await {
        Ok(post) => ToolResult::text(format::post(&post)),
        Err(err) => {
            warn!(tool = "get_post", post_id = %id, error = %err, "tool call failed");
            err.into()
        }
    }
}
