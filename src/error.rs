/// Boxed cause carried by [`SlabError::Network`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised anywhere below the tool façade.
///
/// Every lower layer propagates these unmodified; `handlers` is the single
/// place they are turned into user-visible text.
#[derive(Debug, thiserror::Error)]
pub enum SlabError {
    /// Transport failure, or a response body that violates the GraphQL
    /// response contract. Never retried.
    #[error("Network error: {context}: {source}")]
    Network {
        context: String,
        #[source]
        source: BoxError,
    },

    /// The service rejected the request or could not fulfil it.
    #[error("API error{}: {}", status_suffix(.status), .message)]
    Api { status: Option<u16>, message: String },

    /// A caller-supplied identifier could not be resolved to a post id.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A required startup setting is missing or malformed.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type Result<T, E = SlabError> = std::result::Result<T, E>;

impl SlabError {
    pub fn network(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Network {
            context: context.into(),
            source: source.into(),
        }
    }

    pub fn api(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (status {code})"),
        None => String::new(),
    }
}
