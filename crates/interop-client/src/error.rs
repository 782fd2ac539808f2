//! Error types for interop client operations.

use thiserror::Error;

/// Errors that can occur while talking to the interop platform.
#[derive(Debug, Error)]
pub enum InteropError {
    #[error("Invocation of '{method}' failed: {message}")]
    InvocationFailed { method: String, message: String },

    #[error("Failed to register callback endpoint '{endpoint}': {message}")]
    RegistrationFailed { endpoint: String, message: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not connected to the interop platform")]
    NotConnected,
}

impl InteropError {
    /// Invocation failure with the offending method name attached.
    pub fn invocation(method: impl Into<String>, message: impl Into<String>) -> Self {
        InteropError::InvocationFailed {
            method: method.into(),
            message: message.into(),
        }
    }

    /// Registration failure for a named endpoint.
    pub fn registration(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        InteropError::RegistrationFailed {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, InteropError>;
