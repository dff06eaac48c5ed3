//! Tool definitions advertised through `tools/list`.
//!
//! The input schemas double as the argument validators applied before a
//! tool call is dispatched.

use serde::Serialize;
use serde_json::{json, Value};

pub const GET_POST: &str = "get_post";
pub const UPDATE_POST: &str = "update_post";
pub const SEARCH_POSTS: &str = "search_posts";
pub const LIST_POSTS: &str = "list_posts";

/// A tool definition for the MCP `tools/list` response.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDef {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

fn post_id_property() -> Value {
    json!({
        "type": "string",
        "minLength": 1,
        "description": "Post ID, or a full post URL such as https://team.slab.com/posts/abc123"
    })
}

/// All tools exposed by the server, in advertised order.
pub fn definitions() -> Vec<ToolDef> {
    vec![
        ToolDef {
            name: GET_POST,
            description: "Fetch a Slab post by ID or URL and return its content as plain text",
            input_schema: json!({
                "type": "object",
                "required": ["postId"],
                "properties": {
                    "postId": post_id_property()
                }
            }),
        },
        ToolDef {
            name: UPDATE_POST,
            description: "Replace the full content of a Slab post with the given plain text",
            input_schema: json!({
                "type": "object",
                "required": ["postId", "content"],
                "properties": {
                    "postId": post_id_property(),
                    "content": {
                        "type": "string",
                        "description": "New post body; replaces the existing content entirely"
                    }
                }
            }),
        },
        ToolDef {
            name: SEARCH_POSTS,
            description: "Full-text search across Slab posts",
            input_schema: json!({
                "type": "object",
                "required": ["query"],
                "properties": {
                    "query": {
                        "type": "string",
                        "minLength": 1,
                        "description": "Search terms"
                    },
                    "limit": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": 100,
                        "description": "Maximum number of results (default 20)"
                    }
                }
            }),
        },
        ToolDef {
            name: LIST_POSTS,
            description: "List posts in a topic, or across the whole organization when no topic is given",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "topicId": {
                        "type": "string",
                        "description": "Topic ID to scope the listing"
                    }
                }
            }),
        },
    ]
}

/// Look up a tool definition by name.
pub fn find(name: &str) -> Option<ToolDef> {
    definitions().into_iter().find(|tool| tool.name == name)
}
