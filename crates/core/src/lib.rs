pub mod authentication;
pub use authentication::{
    api_key_guard, create_auth_routes, get_api_key, ApiKeyError, ApiKeyGuard, StatusResponse,
    API_KEY_SCHEME,
};
mod logger;
pub use logger::{setup_info_logger, setup_logger};
mod environment;
pub use environment::load_env_from_project_path;
mod shared;
pub use shared::{bad_request, internal_server_error, unauthorized, HttpError};
mod startup;
pub use startup::{start, StartError};
mod yaml;
pub use yaml::{read, ApiConfig, ReadYamlError, SetupConfig};

pub use tracing::{error as keygate_error, info as keygate_info};
