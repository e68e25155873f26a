//! Tool-specific error types.

use http::StatusCode;
use thiserror::Error;

use super::protocol::error_codes;

/// Message reported when a failed handler gives no usable message.
pub const FALLBACK_MESSAGE: &str = "Internal error";

/// Errors raised by tool handlers and by registry construction.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The tool execution failed.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// A tool with the same name was registered twice.
    #[error("Tool already registered: {0}")]
    AlreadyRegistered(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }

    /// Create a new "already registered" error.
    pub fn already_registered(name: impl Into<String>) -> Self {
        Self::AlreadyRegistered(name.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The bare message carried by this error, without the variant prefix.
    ///
    /// Returns `None` when the message is empty.
    pub fn message(&self) -> Option<&str> {
        let msg = match self {
            Self::InvalidArguments(m)
            | Self::ExecutionFailed(m)
            | Self::AlreadyRegistered(m)
            | Self::Internal(m) => m.as_str(),
        };
        (!msg.is_empty()).then_some(msg)
    }
}

/// Terminal outcome of a dispatch that did not produce a result.
///
/// Each variant maps to exactly one protocol error code and HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The request body was not valid JSON.
    #[error("Parse error")]
    Parse,

    /// Unknown protocol method or unsupported transport method.
    #[error("Method not found")]
    MethodNotFound,

    /// `tools/call` named a tool that is not registered.
    #[error("Tool not found")]
    ToolNotFound,

    /// The tool handler itself failed.
    #[error("{0}")]
    Execution(String),
}

impl DispatchError {
    /// Build an execution error from a handler failure.
    pub fn execution(err: &ToolError) -> Self {
        Self::Execution(err.message().unwrap_or(FALLBACK_MESSAGE).to_string())
    }

    /// Protocol error code carried in the envelope.
    pub fn code(&self) -> i32 {
        match self {
            Self::Parse => error_codes::PARSE_ERROR,
            Self::MethodNotFound | Self::ToolNotFound => error_codes::METHOD_NOT_FOUND,
            Self::Execution(_) => error_codes::INTERNAL_ERROR,
        }
    }

    /// HTTP status paired with the error code.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Parse => StatusCode::BAD_REQUEST,
            Self::MethodNotFound | Self::ToolNotFound => StatusCode::NOT_FOUND,
            Self::Execution(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
