mod auth_guards;
pub use auth_guards::{api_key_guard, ApiKeyGuard};
