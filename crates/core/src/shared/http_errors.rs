use axum::http::StatusCode;

use crate::authentication::ApiKeyError;

pub type HttpError = (StatusCode, String);

pub fn internal_server_error(message: Option<String>) -> HttpError {
    (StatusCode::INTERNAL_SERVER_ERROR, message.unwrap_or("Internal server error".to_string()))
}

pub fn bad_request(message: String) -> HttpError {
    (StatusCode::BAD_REQUEST, message)
}

pub fn unauthorized(message: Option<String>) -> HttpError {
    (StatusCode::UNAUTHORIZED, message.unwrap_or("Unauthorized".to_string()))
}

impl From<ApiKeyError> for HttpError {
    fn from(error: ApiKeyError) -> HttpError {
        unauthorized(Some(error.to_string()))
    }
}
