//! MCP server for Slab knowledge bases.
//!
//! Exposes `get_post`, `update_post`, `search_posts` and `list_posts` tools
//! over JSON-RPC 2.0 stdio transport, backed by the Slab GraphQL API. Post
//! content is translated between Slab's rich-text delta format and plain
//! text in both directions (see [`delta`]).

pub mod client;
pub mod config;
pub mod delta;
pub mod error;
pub mod format;
pub mod graphql;
pub mod handlers;
pub mod post;
pub mod post_id;
pub mod protocol;
pub mod server;
pub mod tools;

pub mod schema;

pub use client::{KnowledgeBase, SlabClient};
pub use error::{Result, SlabError};
pub use post::{Author, Post, PostPage};
