use reqwest::Url;

use crate::error::{Result, SlabError};

/// Resolve a caller-supplied post reference to a bare post id.
///
/// Accepts either an id (`abc123`) or a post URL
/// (`https://team.slab.com/posts/abc123`), in which case the final path
/// segment is the id. A URL whose final segment is empty is rejected.
pub fn extract_post_id(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SlabError::InvalidInput("post id is empty".to_string()));
    }

    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Ok(trimmed.to_string());
    }

    let url = Url::parse(trimmed)
        .map_err(|e| SlabError::InvalidInput(format!("cannot parse post URL `{trimmed}`: {e}")))?;

    match url.path().rsplit('/').next() {
        Some(segment) if !segment.is_empty() => Ok(segment.to_string()),
        _ => Err(SlabError::InvalidInput(format!(
            "post URL `{trimmed}` does not end with a post id"
        ))),
    }
}
