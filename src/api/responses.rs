// src/api/responses.rs
//! Response envelope handling: success bodies deserialize into typed
//! values, error bodies into the Notion error envelope.

use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The error envelope the Notion API returns alongside non-2xx statuses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotionErrorBody {
    /// Always "error".
    pub object: String,
    pub status: u16,
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// A body that is either the expected value or the error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Error(NotionErrorBody),
    Success(T),
}

impl<T> ApiResponse<T> {
    /// Extract the success value or surface the service error.
    pub fn into_result(self, status: reqwest::StatusCode) -> Result<T, AppError> {
        match self {
            ApiResponse::Success(value) => Ok(value),
            ApiResponse::Error(body) => Err(AppError::NotionService {
                code: NotionErrorCode::from_api_response(&body.code),
                message: body.message,
                status,
            }),
        }
    }
}

/// Read a reqwest response into a typed value, mapping error statuses
/// onto the service's own classification.
pub(crate) async fn read_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, AppError> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        return serde_json::from_str(&body).map_err(AppError::from);
    }

    match serde_json::from_str::<NotionErrorBody>(&body) {
        Ok(envelope) => Err(AppError::NotionService {
            code: NotionErrorCode::from_api_response(&envelope.code),
            message: envelope.message,
            status,
        }),
        // Unparseable error body: fall back to the HTTP status and a
        // bounded preview of whatever came back.
        Err(_) => Err(AppError::NotionService {
            code: NotionErrorCode::from_http_status(status.as_u16()),
            message: preview(&body),
            status,
        }),
    }
}

fn preview(body: &str) -> String {
    if body.chars().count() <= ERROR_BODY_PREVIEW_LENGTH {
        body.to_string()
    } else {
        let truncated: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_parses() {
        let body = r#"{
            "object": "error",
            "status": 400,
            "code": "validation_error",
            "message": "body failed validation",
            "request_id": "req_1"
        }"#;
        let envelope: NotionErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.code, "validation_error");
        assert_eq!(
            NotionErrorCode::from_api_response(&envelope.code),
            NotionErrorCode::ValidationFailed
        );
    }

    #[test]
    fn api_response_prefers_error_envelope() {
        let parsed: ApiResponse<serde_json::Value> = serde_json::from_str(
            r#"{"object": "error", "status": 429, "code": "rate_limited", "message": "slow down"}"#,
        )
        .unwrap();
        assert!(matches!(parsed, ApiResponse::Error(_)));

        let result = parsed.into_result(reqwest::StatusCode::TOO_MANY_REQUESTS);
        assert!(matches!(
            result,
            Err(AppError::NotionService {
                code: NotionErrorCode::RateLimited,
                ..
            })
        ));
    }

    #[test]
    fn body_preview_is_bounded() {
        let long = "x".repeat(ERROR_BODY_PREVIEW_LENGTH * 2);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), ERROR_BODY_PREVIEW_LENGTH + 1);
        assert!(shown.ends_with('…'));
    }
}
