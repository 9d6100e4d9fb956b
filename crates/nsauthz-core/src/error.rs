//! Error type for everything around the decision engine.
//!
//! Evaluation itself never fails; these errors come from loading engine
//! configuration and from tools that feed requests to the engine.

use thiserror::Error;

/// Stable error codes, safe to print to operators and scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Configuration is malformed or fails validation.
    InvalidConfig,
    /// Configuration declares a version this build does not understand.
    UnsupportedVersion,
    /// A request could not be decoded.
    InvalidRequest,
    /// I/O or other unexpected failure.
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, NsAuthzError>;

#[derive(Debug, Error)]
pub enum NsAuthzError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl NsAuthzError {
    pub fn code(&self) -> ErrorCode {
        match self {
            NsAuthzError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            NsAuthzError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            NsAuthzError::InvalidRequest(_) => ErrorCode::InvalidRequest,
            NsAuthzError::Internal(_) => ErrorCode::Internal,
        }
    }
}
