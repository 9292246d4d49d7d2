//! The `{code, message, data}` response wrapper used by the storage API.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;

/// Envelope codes with a fixed meaning.
pub mod code {
    pub const SUCCESS: i64 = 1;
    /// Informational pass; treated like success
    pub const CONTINUE: i64 = 100;
    pub const UNAUTHENTICATED: i64 = 401;
    pub const FORBIDDEN: i64 = 403;
}

/// Raw response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Value,
}

impl Envelope {
    /// Classify the envelope by its code, keeping the untyped payload.
    pub fn into_value(self) -> Result<Value, ApiError> {
        match self.code {
            code::SUCCESS | code::CONTINUE => Ok(self.data),
            code::UNAUTHENTICATED => Err(ApiError::Unauthenticated),
            code::FORBIDDEN => Err(ApiError::Forbidden),
            other => Err(ApiError::Application {
                code: other,
                message: self.message,
            }),
        }
    }

    /// Classify the envelope and decode its payload.
    pub fn into_result<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let data = self.into_value()?;
        serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Parse a response body as an envelope.
    pub fn parse(body: &str) -> Result<Self, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Message to show for a failed HTTP response, taken from the body's
/// envelope when there is one.
pub fn error_message(status: u16, body: &str) -> String {
    Envelope::parse(body)
        .ok()
        .map(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP error: {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileEntry;

    #[test]
    fn test_success_decodes_data() {
        let env = Envelope::parse(
            r#"{"code":1,"message":"ok","data":[{"path":"/a","name":"a","isDir":true}]}"#,
        )
        .unwrap();
        let entries: Vec<FileEntry> = env.into_result().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_dir);
    }

    #[test]
    fn test_continue_code_passes() {
        let env = Envelope::parse(r#"{"code":100,"message":"pending"}"#).unwrap();
        assert_eq!(env.into_value().unwrap(), Value::Null);
    }

    #[test]
    fn test_auth_codes() {
        let env = Envelope::parse(r#"{"code":401,"message":"login"}"#).unwrap();
        assert_eq!(env.into_value(), Err(ApiError::Unauthenticated));
        let env = Envelope::parse(r#"{"code":403,"message":"no"}"#).unwrap();
        assert_eq!(env.into_value(), Err(ApiError::Forbidden));
    }

    #[test]
    fn test_other_codes_carry_message() {
        let env = Envelope::parse(r#"{"code":0,"message":"no such file"}"#).unwrap();
        assert_eq!(
            env.into_value(),
            Err(ApiError::Application {
                code: 0,
                message: "no such file".to_string()
            })
        );
    }

    #[test]
    fn test_bad_payload_is_decode_error() {
        let env = Envelope::parse(r#"{"code":1,"data":"not a list"}"#).unwrap();
        let result: Result<Vec<FileEntry>, _> = env.into_result();
        assert!(matches!(result, Err(ApiError::Decode(_))));
        assert!(matches!(Envelope::parse("<html>"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            error_message(500, r#"{"code":500,"message":"disk full"}"#),
            "disk full"
        );
        assert_eq!(error_message(502, "Bad Gateway"), "HTTP error: 502");
        assert_eq!(error_message(500, r#"{"code":500}"#), "HTTP error: 500");
    }
}
