use tracing::warn;

use crate::client::KnowledgeBase;
use crate::format;
use crate::post_id::extract_post_id;
use crate::protocol::{ToolResult, UpdatePostParams};

/// Handle an `update_post` tool call.
///
/// On failure the error text carries the underlying cause, so a caller can
/// tell a failed read (nothing written) from a failed write.
pub async fn handle(params: UpdatePostParams, kb: &dyn KnowledgeBase) -> ToolResult {
    let id = match extract_post_id(&params.post_id) {
        Ok(id) => id,
        Err(err) => return err.into(),
    };

    match kb.update_post(&id, &params.content).await {
        Ok(post) => ToolResult::text(format!("Post updated.\n\n{}", format::post(&post))),
        Err(err) => {
            warn!(tool = "update_post", post_id = %id, error = %err, "tool call failed");
            err.into()
        }
    }
}
