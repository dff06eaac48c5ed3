//! Canonical post shape and the transform from raw service records.
//!
//! Records arrive in one of two field-naming conventions: the GraphQL schema
//! (`owner`, `insertedAt`, `name`) or the REST-flavoured one (`createdBy`,
//! `createdAt`, `displayName`, plus snake_case variants). Each canonical field
//! is looked up through a closed, ordered alias list; the first alias present
//! and non-null wins.

use serde::Serialize;
use serde_json::Value;

use crate::delta;

pub const ID_ALIASES: &[&str] = &["id"];
pub const TITLE_ALIASES: &[&str] = &["title"];
pub const CONTENT_ALIASES: &[&str] = &["content"];
pub const URL_ALIASES: &[&str] = &["url"];
pub const CREATED_AT_ALIASES: &[&str] = &["insertedAt", "createdAt", "created_at"];
pub const UPDATED_AT_ALIASES: &[&str] = &["updatedAt", "updated_at"];
pub const AUTHOR_ALIASES: &[&str] = &["owner", "createdBy", "created_by"];
pub const DISPLAY_NAME_ALIASES: &[&str] = &["name", "displayName", "display_name"];
pub const EMAIL_ALIASES: &[&str] = &["email"];

/// A knowledge-base post as exposed to tool callers.
///
/// `content` is always plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Author>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A page of posts from a search or list query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostPage {
    pub posts: Vec<Post>,
    /// Number of posts in this page; the service exposes no true total.
    pub total_count: usize,
}

impl PostPage {
    pub fn new(posts: Vec<Post>) -> Self {
        let total_count = posts.len();
        Self { posts, total_count }
    }
}

/// URL of a post on the team's Slab site.
pub fn post_url(base_url: &str, id: &str) -> String {
    format!("{}/posts/{}", base_url.trim_end_matches('/'), id)
}

/// Normalize a raw record into a [`Post`].
///
/// Never fails: missing fields become empty strings or `None`.
pub fn from_record(record: &Value, base_url: &str) -> Post {
    let id = lookup(record, ID_ALIASES).map(scalar_string).unwrap_or_default();

    let title = lookup_str(record, TITLE_ALIASES).unwrap_or_default();

    let content = match lookup(record, CONTENT_ALIASES) {
        Some(Value::String(text)) => text.clone(),
        other => delta::flatten(other),
    };

    let url = lookup_str(record, URL_ALIASES).unwrap_or_else(|| post_url(base_url, &id));

    Post {
        id,
        title,
        content,
        url,
        created_at: lookup_str(record, CREATED_AT_ALIASES),
        updated_at: lookup_str(record, UPDATED_AT_ALIASES),
        created_by: lookup(record, AUTHOR_ALIASES).and_then(author_from),
    }
}

fn author_from(value: &Value) -> Option<Author> {
    if !value.is_object() {
        return None;
    }

    Some(Author {
        id: lookup(value, ID_ALIASES).map(scalar_string).unwrap_or_default(),
        display_name: lookup_str(value, DISPLAY_NAME_ALIASES),
        email: lookup_str(value, EMAIL_ALIASES),
    })
}

/// First non-null value among `aliases`.
fn lookup<'a>(record: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .filter_map(|key| record.get(*key))
        .find(|value| !value.is_null())
}

fn lookup_str(record: &Value, aliases: &[&str]) -> Option<String> {
    lookup(record, aliases).map(scalar_string)
}

/// Render a scalar as a string; ids are sometimes numeric.
fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
