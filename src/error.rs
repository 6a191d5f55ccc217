use axum::{http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::error;

/// Handler rejection: status plus a `{"error": "..."}` body.
pub type ApiError = (StatusCode, Json<Value>);

pub fn bad_request(msg: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": msg })))
}

pub fn unauthorized(msg: &str) -> ApiError {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": msg })))
}

pub fn forbidden(msg: &str) -> ApiError {
    (StatusCode::FORBIDDEN, Json(json!({ "error": msg })))
}

/// Generic 500; the real cause stays in the server log.
pub fn internal(err: anyhow::Error) -> ApiError {
    error!(error = %err, "internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Server error" })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_carries_message() {
        let (status, Json(body)) = bad_request("Fill in all fields");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Fill in all fields");
    }

    #[test]
    fn internal_hides_cause() {
        let (status, Json(body)) = internal(anyhow::anyhow!("connection refused"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Server error");
    }
}
