use mcp_common::error::CommonError;
use seo_engine::error::EngineError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("config error: {0}")]
    Config(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: u64 },
}

impl AppError {
    pub fn project_not_found(id: u64) -> Self {
        Self::NotFound { kind: "project", id }
    }

    pub fn content_not_found(id: u64) -> Self {
        Self::NotFound { kind: "content", id }
    }
}
