//! API response envelope and error mapping
//!
//! Every endpoint answers with the same wrapper:
//! `{success, statusCode, message, data}`. The HTTP status is derived from
//! the closed [`ServiceError`] type, never compared as strings.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ServiceError;

/// Unified API response wrapper
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the request was processed successfully
    #[schema(example = true)]
    pub success: bool,
    /// Mirror of the HTTP status code
    #[schema(example = 200)]
    pub status_code: u16,
    /// Short message description
    #[schema(example = "success")]
    pub message: String,
    /// Payload on success, null on failure
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            status_code: StatusCode::OK.as_u16(),
            message: "success".to_string(),
            data: Some(data),
        }
    }
}

/// Handler-level failure carrying the service error
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self(ServiceError::validation(msg))
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self(ServiceError::validation(msg))
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self(ServiceError::not_found(msg))
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self(ServiceError::system(msg))
    }

    /// Convenience for handlers that want to early-return an error
    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }

    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ServiceError::Validation(_) | ServiceError::Duplicate(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::System(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self.0, ServiceError::System(_)) {
            tracing::error!(error = %self.0, "request failed");
        }

        let status = self.status();
        let body = ApiResponse::<()> {
            success: false,
            status_code: status.as_u16(),
            message: self.0.to_string(),
            data: None,
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// Create success response
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(ServiceError::validation("bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ServiceError::duplicate("dup")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ServiceError::not_found("missing")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(ServiceError::system("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_envelope_serialization() {
        let response = ApiResponse::success(serde_json::json!({"id": 1}));
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["statusCode"], 200);
        assert_eq!(body["message"], "success");
        assert_eq!(body["data"]["id"], 1);
    }

    #[test]
    fn test_failure_envelope_has_null_data() {
        let body = ApiResponse::<()> {
            success: false,
            status_code: 404,
            message: "order 9 not found".to_string(),
            data: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["data"], serde_json::Value::Null);
        assert_eq!(value["statusCode"], 404);
    }
}
