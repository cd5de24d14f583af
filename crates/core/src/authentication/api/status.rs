use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::authentication::get_api_key;
use crate::shared::HttpError;

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub authenticated: bool,
    pub message: String,
}

/// Simple endpoint to verify the presented API key parses.
pub async fn status(headers: HeaderMap) -> Result<Json<StatusResponse>, HttpError> {
    let _api_key = get_api_key(&headers)?;

    Ok(Json(StatusResponse {
        authenticated: true,
        message: "API key authentication successful".to_string(),
    }))
}
