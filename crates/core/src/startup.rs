use std::{path::Path, time::Instant};

use axum::{
    body::Body,
    http::{HeaderValue, Request, StatusCode},
    middleware,
    middleware::Next,
    response::Response,
    routing::get,
    Json, Router,
};
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{error, info};

use crate::{
    authentication::create_auth_routes,
    logger::setup_info_logger,
    shared::HttpError,
    yaml::{read, ReadYamlError},
};

#[derive(Error, Debug)]
pub enum StartError {
    #[error("Failed to find the yaml file")]
    NoYamlFileFound,

    #[error("{0}")]
    ReadYamlError(#[from] ReadYamlError),

    #[error("Failed to start the API: {0}")]
    ApiStartupError(#[from] std::io::Error),
}

/// Health check endpoint
async fn health_check() -> Result<Json<String>, HttpError> {
    Ok(Json("healthy".to_string()))
}

/// Middleware that logs all HTTP requests and responses with timing information.
async fn activity_logger(req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let duration = start.elapsed();

    if status.is_client_error() || status.is_server_error() {
        error!("{} {} responded with {} after {:?}", method, uri, status, duration);
    } else {
        info!("{} {} responded with {} after {:?}", method, uri, status, duration);
    }

    Ok(response)
}

pub async fn start(project_path: &Path) -> Result<(), StartError> {
    setup_info_logger();
    dotenvy::dotenv().ok();

    let yaml_path = project_path.join("keygate.yaml");
    if !yaml_path.exists() {
        error!("No keygate.yaml found in {:?}", project_path);
        return Err(StartError::NoYamlFileFound);
    }

    let config = read(&yaml_path, false)?;
    info!("Starting up {}", config.name);

    let api_config = config.api_config;

    let cors = CorsLayer::new()
        .allow_origin(
            if api_config.allowed_origins.as_ref().is_none_or(|origins| origins.is_empty()) {
                AllowOrigin::any()
            } else {
                AllowOrigin::list(
                    api_config
                        .allowed_origins
                        .unwrap_or_default()
                        .into_iter()
                        .filter_map(|origin| HeaderValue::from_str(&origin).ok())
                        .collect::<Vec<HeaderValue>>(),
                )
            },
        )
        .allow_methods(Any)
        .allow_headers(Any);

    // All routes handle their own authentication logic internally
    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/auth", create_auth_routes())
        .layer(middleware::from_fn(activity_logger))
        .layer(cors);

    let address =
        format!("{}:{}", api_config.host.unwrap_or("localhost".to_string()), api_config.port);

    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("keygate is up on http://{}", address);
    axum::serve(listener, app).await.map_err(StartError::ApiStartupError)?;

    Ok(())
}
