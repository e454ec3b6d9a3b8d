use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use serde_json::json;

/// Envelope for a successful function invocation.
pub fn json_success<T: Serialize>(data: T) -> axum::response::Response {
    (
        StatusCode::OK,
        axum::Json(json!({
            "success": true,
            "data": data,
        })),
    )
        .into_response()
}

/// Envelope for a failed invocation: always a 500 with the function's fixed
/// error code and the underlying message.
pub fn json_error(code: &'static str, message: impl Into<String>) -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({
            "error": {
                "code": code,
                "message": message.into(),
            },
        })),
    )
        .into_response()
}
