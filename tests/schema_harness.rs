use mcp_slab_server::schema::{validate, SchemaValidationError};
use mcp_slab_server::tools;
use serde_json::json;

#[test]
fn every_tool_schema_compiles() {
    for tool in tools::definitions() {
        // An empty object is valid for list_posts only, but compiling must
        // succeed for all of them.
        match validate(&tool.input_schema, &json!({})) {
            Ok(()) | Err(SchemaValidationError::ValidationFailed(_)) => {}
            Err(other) => panic!("{}: {other}", tool.name),
        }
    }
}

#[test]
fn update_post_schema_accepts_complete_arguments() {
    let tool = tools::find(tools::UPDATE_POST).unwrap();
    validate(
        &tool.input_schema,
        &json!({ "postId": "abc", "content": "text" }),
    )
    .expect("schema validation failed");
}

#[test]
fn update_post_schema_reports_each_violation() {
    let tool = tools::find(tools::UPDATE_POST).unwrap();
    let err = validate(&tool.input_schema, &json!({ "postId": "" })).unwrap_err();

    match err {
        SchemaValidationError::ValidationFailed(problems) => {
            assert_eq!(problems.len(), 2, "{problems:?}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn search_limit_bounds_are_enforced() {
    let tool = tools::find(tools::SEARCH_POSTS).unwrap();
    assert!(validate(&tool.input_schema, &json!({ "query": "x", "limit": 100 })).is_ok());
    assert!(validate(&tool.input_schema, &json!({ "query": "x", "limit": 0 })).is_err());
    assert!(validate(&tool.input_schema, &json!({ "query": "x", "limit": 101 })).is_err());
}

#[test]
fn invalid_schema_is_a_compile_error() {
    let err = validate(&json!({ "type": 12 }), &json!({})).unwrap_err();
    assert!(matches!(err, SchemaValidationError::SchemaCompile(_)));
}
