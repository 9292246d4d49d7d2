//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ApiError`] - Storage API calls (transport, auth, envelope failures)
//! - [`UploadError`] - XHR upload transport failures

use thiserror::Error;

/// Errors from calls to the storage management API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Failed to build the HTTP request
    #[error("Failed to create request: {0}")]
    RequestBuild(String),
    /// Connectivity failure (offline, DNS, CORS)
    #[error("Network Error")]
    Network(String),
    /// Session missing or expired (envelope code or HTTP status 401)
    #[error("Unauthenticated")]
    Unauthenticated,
    /// Operation refused (envelope code 403)
    #[error("Permission denied")]
    Forbidden,
    /// Envelope reported a failure code
    #[error("{message}")]
    Application { code: i64, message: String },
    /// Non-2xx HTTP status
    #[error("{message}")]
    Http { status: u16, message: String },
    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

/// Errors from a single file upload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Transfer was aborted (by the user closing its notification)
    #[error("Upload canceled")]
    Aborted,
    /// XHR `error` event: connection dropped or refused
    #[error("Internal Server Error")]
    Transport,
    /// Request finished with a non-2xx status
    #[error("Internal Server Error (status {0})")]
    Status(u16),
    /// XHR could not be created, opened or sent
    #[error("Upload could not start: {0}")]
    Setup(String),
}

impl UploadError {
    /// Classify a completed XHR by status code.
    ///
    /// Status `0` means no response arrived: a cancellation if the transfer
    /// was aborted locally, a transport failure otherwise.
    pub fn from_completion(status: u16, aborted: bool) -> Result<(), Self> {
        match status {
            200..=299 => Ok(()),
            0 if aborted => Err(Self::Aborted),
            0 => Err(Self::Transport),
            other => Err(Self::Status(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_status_classification() {
        assert_eq!(UploadError::from_completion(200, false), Ok(()));
        assert_eq!(UploadError::from_completion(204, false), Ok(()));
        assert_eq!(UploadError::from_completion(0, true), Err(UploadError::Aborted));
        assert_eq!(UploadError::from_completion(0, false), Err(UploadError::Transport));
        assert_eq!(
            UploadError::from_completion(413, false),
            Err(UploadError::Status(413))
        );
        assert_eq!(
            UploadError::from_completion(502, false),
            Err(UploadError::Status(502))
        );
    }

    #[test]
    fn test_display_uses_server_message() {
        let err = ApiError::Application {
            code: 0,
            message: "directory not empty".to_string(),
        };
        assert_eq!(err.to_string(), "directory not empty");
        assert_eq!(ApiError::Network("offline".into()).to_string(), "Network Error");
    }
}
