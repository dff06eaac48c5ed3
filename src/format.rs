//! Markdown rendering of tool results.

use crate::post::{Post, PostPage};

fn display_title(post: &Post) -> &str {
    if post.title.is_empty() {
        "(untitled)"
    } else {
        post.title.as_str()
    }
}

/// Render a full post: heading, metadata list, then the body.
pub fn post(post: &Post) -> String {
    let mut lines = vec![
        format!("# {}", display_title(post)),
        String::new(),
        format!("- ID: {}", post.id),
        format!("- URL: {}", post.url),
    ];

    if let Some(author) = &post.created_by {
        let name = author.display_name.as_deref().unwrap_or(author.id.as_str());
        lines.push(match &author.email {
            Some(email) => format!("- Author: {name} <{email}>"),
            None => format!("- Author: {name}"),
        });
    }
    if let Some(created) = &post.created_at {
        lines.push(format!("- Created: {created}"));
    }
    if let Some(updated) = &post.updated_at {
        lines.push(format!("- Updated: {updated}"));
    }
    lines.push(String::new());

    let mut out = lines.join("\n");
    out.push('\n');
    out.push_str(&post.content);
    out
}

/// Render a page of posts as a numbered list, in source order.
pub fn page(heading: &str, page: &PostPage) -> String {
    if page.posts.is_empty() {
        return "No posts found.\n".to_string();
    }

    let noun = if page.total_count == 1 { "post" } else { "posts" };
    let mut out = format!("{heading}: {} {noun}\n\n", page.total_count);

    for (index, post) in page.posts.iter().enumerate() {
        out.push_str(&format!(
            "{}. [{}]({}) (ID: {})\n",
            index + 1,
            display_title(post),
            post.url,
            post.id
        ));
    }

    out
}
