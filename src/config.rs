use std::fmt;
use std::time::Duration;

use crate::error::{Result, SlabError};

/// Default GraphQL endpoint of the Slab API.
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.slab.com/v1/graphql";

/// Scheme placed in front of the token in the `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <token>`
    Bearer,
    /// `Authorization: token <token>`
    Token,
}

impl AuthScheme {
    pub fn header_value(self, token: &str) -> String {
        match self {
            Self::Bearer => format!("Bearer {token}"),
            Self::Token => format!("token {token}"),
        }
    }
}

impl std::str::FromStr for AuthScheme {
    type Err = SlabError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bearer" => Ok(Self::Bearer),
            "token" => Ok(Self::Token),
            other => Err(SlabError::Configuration(format!(
                "SLAB_AUTH_SCHEME must be `bearer` or `token`, got `{other}`"
            ))),
        }
    }
}

/// Server configuration loaded once at startup.
#[derive(Clone)]
pub struct ServerConfig {
    pub api_token: String,
    pub team: String,
    /// Team site root, e.g. `https://acme.slab.com`.
    pub base_url: String,
    pub graphql_url: String,
    pub auth_scheme: AuthScheme,
    /// Per-request timeout; `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `SLAB_API_TOKEN` (required) — API token
    /// - `SLAB_TEAM` (required) — team id, used to derive the site URL
    /// - `SLAB_GRAPHQL_URL` (optional) — GraphQL endpoint override
    /// - `SLAB_AUTH_SCHEME` (optional, default `bearer`) — `bearer` or `token`
    /// - `SLAB_REQUEST_TIMEOUT_SECS` (optional) — per-request timeout
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    SlabError::Configuration(format!("{key} environment variable is not set"))
                })
        };
        let optional = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_token = required("SLAB_API_TOKEN")?;
        let team = required("SLAB_TEAM")?;

        let graphql_url =
            optional("SLAB_GRAPHQL_URL").unwrap_or_else(|| DEFAULT_GRAPHQL_URL.to_string());

        let auth_scheme = match optional("SLAB_AUTH_SCHEME") {
            Some(raw) => raw.parse()?,
            None => AuthScheme::Bearer,
        };

        let request_timeout = match optional("SLAB_REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(SlabError::Configuration(
                        "SLAB_REQUEST_TIMEOUT_SECS must be a positive integer".to_string(),
                    ))
                }
            },
            None => None,
        };

        Ok(Self {
            base_url: team_base_url(&team),
            api_token,
            team,
            graphql_url,
            auth_scheme,
            request_timeout,
        })
    }
}

/// Site URL for a team id.
pub fn team_base_url(team: &str) -> String {
    format!("https://{team}.slab.com")
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("api_token", &"<redacted>")
            .field("team", &self.team)
            .field("base_url", &self.base_url)
            .field("graphql_url", &self.graphql_url)
            .field("auth_scheme", &self.auth_scheme)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
