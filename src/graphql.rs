//! Single-shot GraphQL executor for the Slab API.
//!
//! Failures are classified three ways:
//!
//! - transport failures and bodies that are not a valid GraphQL response
//!   become [`SlabError::Network`];
//! - non-2xx statuses and reported GraphQL `errors` become
//!   [`SlabError::Api`] with the HTTP status;
//! - a response with neither `errors` nor `data` becomes a missing-data
//!   [`SlabError::Api`].

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ServerConfig;
use crate::error::{Result, SlabError};

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: &'a Value,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

/// An entry of the response `errors` list. Extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
}

/// GraphQL client bound to one endpoint and credential.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    client: Client,
    endpoint: String,
}

impl GraphQlClient {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&config.auth_scheme.header_value(&config.api_token))
            .map_err(|_| {
                SlabError::Configuration("SLAB_API_TOKEN contains invalid header characters".into())
            })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("mcp-slab-server/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            SlabError::Configuration(format!("cannot build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            endpoint: config.graphql_url.clone(),
        })
    }

    /// Execute `query` with `variables` and decode `data` as `T`.
    pub async fn execute<T>(&self, query: &str, variables: Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let operation = operation_name(query);
        debug!(operation, endpoint = %self.endpoint, "sending GraphQL request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest {
                query,
                variables: &variables,
            })
            .send()
            .await
            .map_err(|e| {
                warn!(operation, error = %e, "GraphQL request failed");
                SlabError::network(format!("{operation} request failed"), e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!(operation, error = %e, "cannot read GraphQL response body");
            SlabError::network(format!("{operation} response body unreadable"), e)
        })?;

        if !status.is_success() {
            warn!(operation, status = status.as_u16(), "GraphQL endpoint returned an error status");
            return Err(SlabError::api(Some(status.as_u16()), body));
        }

        decode_response(operation, status.as_u16(), &body)
    }
}

/// Classify a successful-status response body.
fn decode_response<T>(operation: &str, status: u16, body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let parsed: GraphQlResponse = serde_json::from_str(body).map_err(|e| {
        warn!(operation, error = %e, "malformed GraphQL response");
        SlabError::network(format!("{operation} returned a malformed response"), e)
    })?;

    if let Some(errors) = parsed.errors.filter(|errors| !errors.is_empty()) {
        let message = errors
            .iter()
            .map(|e| {
                if e.message.is_empty() {
                    "unspecified GraphQL error"
                } else {
                    e.message.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        warn!(operation, %message, "GraphQL errors reported");
        return Err(SlabError::api(Some(status), message));
    }

    let data = match parsed.data {
        Some(Value::Null) | None => {
            return Err(SlabError::api(
                Some(status),
                format!("{operation} response contained no data"),
            ))
        }
        Some(data) => data,
    };

    serde_json::from_value(data).map_err(|e| {
        warn!(operation, error = %e, "GraphQL data has an unexpected shape");
        SlabError::network(format!("{operation} returned data of an unexpected shape"), e)
    })
}

/// Name of the first operation in `query`, for logs and error context.
fn operation_name(query: &str) -> &str {
    let trimmed = query.trim_start();
    let rest = ["query", "mutation"]
        .iter()
        .find_map(|kw| trimmed.strip_prefix(*kw))
        .map(str::trim_start);

    match rest {
        Some(rest) => {
            let end = rest
                .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            if end == 0 {
                "anonymous"
            } else {
                &rest[..end]
            }
        }
        None => "anonymous",
    }
}
