//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid log level directive: {0}")]
    InvalidLogLevel(String),

    #[error("Invalid classifier endpoint URL")]
    InvalidClassifierEndpoint,

    #[error("Classifier endpoint must use HTTPS in production")]
    EndpointMustBeHttps,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Catalog pool needs at least one connection")]
    InvalidPoolSize,

    #[error("Catalog pool size exceeds maximum allowed (50)")]
    PoolSizeTooLarge,

    #[error("Confidence threshold must be between 0 and 1")]
    InvalidConfidenceThreshold,

    #[error("Tax rate must be between 0 and 1")]
    InvalidTaxRate,

    #[error("Reply delay exceeds maximum allowed (60000 ms)")]
    ReplyDelayTooLong,
}
