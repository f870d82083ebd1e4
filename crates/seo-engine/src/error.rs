/// Errors raised by the engine's validating entry points.
///
/// Scoring and density analysis never fail; only operations that need a usable
/// keyword, business type or URL return these.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("target keyword must not be empty")]
    EmptyKeyword,

    #[error("{0} must not be empty")]
    MissingField(&'static str),

    #[error("Please enter a valid URL (including http:// or https://)")]
    InvalidUrl(String),
}
