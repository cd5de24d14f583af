use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{request::Parts, Request, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::authentication::api_key::get_api_key;

/// Extractor that pulls the API key out of the Authorization header.
///
/// Handlers taking this extractor reject with UNAUTHORIZED when the header
/// is missing or does not parse as `ApiKey <key>`. The wrapped string is the
/// raw key; whether it maps to a real credential is up to the caller.
#[derive(Debug)]
pub struct ApiKeyGuard(pub String);

impl<S> FromRequestParts<S> for ApiKeyGuard
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        get_api_key(&parts.headers).map(ApiKeyGuard).map_err(|_| StatusCode::UNAUTHORIZED)
    }
}

/// Middleware guard that requires a parseable `ApiKey` Authorization header.
///
/// # Arguments
/// * `req` - The HTTP request to validate
/// * `next` - The next middleware in the chain
///
/// # Returns
/// * `Ok(Response)` - If a key could be extracted, continues to the next middleware
/// * `Err(StatusCode)` - UNAUTHORIZED if the header is missing or malformed
pub async fn api_key_guard(req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let (mut parts, body) = req.into_parts();
    ApiKeyGuard::from_request_parts(&mut parts, &()).await?;
    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use axum::{routing::get, Router};
    use tower::ServiceExt;

    use super::*;

    fn request_parts(auth_value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = auth_value {
            builder = builder.header("Authorization", value);
        }
        let (parts, _) = builder.body(()).unwrap().into_parts();
        parts
    }

    #[tokio::test]
    async fn test_guard_extracts_key() {
        let mut parts = request_parts(Some("ApiKey abc123xyz"));
        let ApiKeyGuard(key) = ApiKeyGuard::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(key, "abc123xyz");
    }

    #[tokio::test]
    async fn test_guard_rejects_missing_header() {
        let mut parts = request_parts(None);
        let rejection = ApiKeyGuard::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(rejection, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_guard_rejects_wrong_scheme() {
        let mut parts = request_parts(Some("Bearer abc123xyz"));
        let rejection = ApiKeyGuard::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(rejection, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_middleware_gates_route() {
        let app = Router::new()
            .route("/protected", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn(api_key_guard));

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/protected").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/protected")
                    .header("Authorization", "ApiKey abc123xyz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
