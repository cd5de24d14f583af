mod http_errors;
pub use http_errors::{bad_request, internal_server_error, unauthorized, HttpError};
