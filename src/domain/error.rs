use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("Invalid host pattern: {0}")]
    Pattern(String),
    #[error("Specification error: {0}")]
    Specification(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}
