//! The response envelope shared by every operation.

use serde::Serialize;

use crate::error::IntakeError;

/// The `{success, message, code, data}` wrapper used by all endpoints.
/// `message` is populated only on failure; `data` only on success.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub code: u16,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Success envelope (200).
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            code: 200,
            data: Some(data),
        }
    }

    /// Creation success envelope (201).
    pub fn created(data: T) -> Self {
        Self {
            success: true,
            message: None,
            code: 201,
            data: Some(data),
        }
    }

    /// Failure envelope.
    pub fn fail(message: impl Into<String>, code: u16) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            code,
            data: None,
        }
    }

    /// Failure envelope for a name-lookup miss.
    pub fn not_found(name: &str) -> Self {
        Self::fail(format!("Employee '{name}' not found."), 404)
    }

    /// Map a failed intake to its envelope.
    ///
    /// Recoverable outcomes keep their diagnostic message with a 400
    /// code; internal failures get a generic 500 body with no detail
    /// leaked.
    pub fn from_intake_error(error: &IntakeError) -> Self {
        match error {
            IntakeError::Internal(_) => Self::fail("An internal server error occurred.", 500),
            recoverable => Self::fail(recoverable.to_string(), 400),
        }
    }
}
