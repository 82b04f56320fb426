use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("store API returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// GraphQL-level errors (bad query, insufficient scopes).
    #[error("store API query failed: {}", .messages.join(", "))]
    Query { messages: Vec<String> },

    /// Field-level `userErrors` from a mutation.
    #[error("store rejected {operation}: {}", .messages.join(", "))]
    Rejected {
        operation: String,
        messages: Vec<String>,
    },

    #[error("store response missing {0}")]
    MissingData(&'static str),
}
