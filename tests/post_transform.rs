//! Raw record → canonical `Post` normalization.

use mcp_slab_server::post::{
    from_record, post_url, Author, PostPage, AUTHOR_ALIASES, CREATED_AT_ALIASES,
    DISPLAY_NAME_ALIASES, UPDATED_AT_ALIASES,
};
use serde_json::json;

const BASE: &str = "https://acme.slab.com";

#[test]
fn graphql_record_maps_to_post() {
    let record = json!({
        "id": "123",
        "title": "T",
        "content": [{ "insert": "hi" }],
        "insertedAt": "t1",
        "owner": { "id": "u1", "name": "A" }
    });

    let post = from_record(&record, BASE);

    assert_eq!(post.id, "123");
    assert_eq!(post.title, "T");
    assert_eq!(post.content, "hi");
    assert_eq!(post.url, "https://acme.slab.com/posts/123");
    assert_eq!(post.created_at.as_deref(), Some("t1"));
    assert_eq!(post.updated_at, None);
    assert_eq!(
        post.created_by,
        Some(Author {
            id: "u1".to_string(),
            display_name: Some("A".to_string()),
            email: None,
        })
    );
}

#[test]
fn rest_record_maps_to_post() {
    let record = json!({
        "id": "p9",
        "title": "Runbook",
        "content": "already plain",
        "url": "https://acme.slab.com/posts/runbook-p9",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-02-01T00:00:00Z",
        "createdBy": { "id": "u2", "displayName": "Bo", "email": "bo@acme.test" }
    });

    let post = from_record(&record, BASE);

    assert_eq!(post.content, "already plain");
    assert_eq!(post.url, "https://acme.slab.com/posts/runbook-p9");
    assert_eq!(post.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
    assert_eq!(post.updated_at.as_deref(), Some("2024-02-01T00:00:00Z"));
    let author = post.created_by.unwrap();
    assert_eq!(author.display_name.as_deref(), Some("Bo"));
    assert_eq!(author.email.as_deref(), Some("bo@acme.test"));
}

#[test]
fn every_author_alias_is_recognised() {
    for author_key in AUTHOR_ALIASES {
        for name_key in DISPLAY_NAME_ALIASES {
            let record = json!({
                "id": "1",
                *author_key: { "id": "u", *name_key: "Name" }
            });
            let author = from_record(&record, BASE)
                .created_by
                .unwrap_or_else(|| panic!("{author_key}/{name_key} not recognised"));
            assert_eq!(author.display_name.as_deref(), Some("Name"));
        }
    }
}

#[test]
fn every_timestamp_alias_is_recognised() {
    for key in CREATED_AT_ALIASES {
        let post = from_record(&json!({ "id": "1", *key: "c" }), BASE);
        assert_eq!(post.created_at.as_deref(), Some("c"), "alias {key}");
    }
    for key in UPDATED_AT_ALIASES {
        let post = from_record(&json!({ "id": "1", *key: "u" }), BASE);
        assert_eq!(post.updated_at.as_deref(), Some("u"), "alias {key}");
    }
}

#[test]
fn alias_order_decides_between_conventions() {
    let record = json!({
        "id": "1",
        "insertedAt": "graphql",
        "createdAt": "rest",
        "owner": { "id": "owner" },
        "createdBy": { "id": "creator" }
    });

    let post = from_record(&record, BASE);
    assert_eq!(post.created_at.as_deref(), Some("graphql"));
    assert_eq!(post.created_by.unwrap().id, "owner");
}

#[test]
fn null_fields_fall_through_to_next_alias() {
    let record = json!({ "id": "1", "owner": null, "createdBy": { "id": "u3" } });
    assert_eq!(from_record(&record, BASE).created_by.unwrap().id, "u3");
}

#[test]
fn partial_records_do_not_fail() {
    let post = from_record(&json!({ "id": 77 }), BASE);

    assert_eq!(post.id, "77");
    assert_eq!(post.title, "");
    assert_eq!(post.content, "");
    assert_eq!(post.url, "https://acme.slab.com/posts/77");
    assert!(post.created_by.is_none());

    let odd_owner = from_record(&json!({ "id": "1", "owner": "someone" }), BASE);
    assert!(odd_owner.created_by.is_none());

    let empty_owner = from_record(&json!({ "id": "1", "owner": {} }), BASE).created_by.unwrap();
    assert_eq!(empty_owner.id, "");
    assert_eq!(empty_owner.display_name, None);
}

#[test]
fn malformed_content_flattens_to_empty() {
    let post = from_record(&json!({ "id": "1", "content": { "weird": true } }), BASE);
    assert_eq!(post.content, "");
}

#[test]
fn url_template_ignores_trailing_slash() {
    assert_eq!(post_url("https://acme.slab.com/", "x"), "https://acme.slab.com/posts/x");
}

#[test]
fn page_total_counts_returned_posts() {
    let posts = vec![
        from_record(&json!({ "id": "a" }), BASE),
        from_record(&json!({ "id": "b" }), BASE),
    ];
    let page = PostPage::new(posts);
    assert_eq!(page.total_count, 2);
    assert_eq!(page.posts[0].id, "a");
}
