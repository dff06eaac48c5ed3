#![allow(dead_code)]

use mcp_slab_server::config::{AuthScheme, ServerConfig};

pub const TOKEN: &str = "test-token";
pub const BASE_URL: &str = "https://acme.slab.com";

/// Config pointing the GraphQL endpoint at `graphql_url`.
pub fn test_config(graphql_url: impl Into<String>) -> ServerConfig {
    ServerConfig {
        api_token: TOKEN.to_string(),
        team: "acme".to_string(),
        base_url: BASE_URL.to_string(),
        graphql_url: graphql_url.into(),
        auth_scheme: AuthScheme::Bearer,
        request_timeout: None,
    }
}
