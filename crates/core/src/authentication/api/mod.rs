use axum::{routing::get, Router};

pub mod status;
pub use status::StatusResponse;

pub fn create_auth_routes() -> Router {
    Router::new().route("/status", get(status::status))
}
