mod api_key;
pub use api_key::{get_api_key, ApiKeyError, API_KEY_SCHEME};

mod guards;
pub use guards::{api_key_guard, ApiKeyGuard};

mod api;
pub use api::{create_auth_routes, StatusResponse};
