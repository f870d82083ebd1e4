/// Infrastructure errors shared by the MCP server crates.
///
/// Server crates define their own error type and wrap `CommonError` via `#[from]`.
#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("redis is not configured")]
    RedisDisabled,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
