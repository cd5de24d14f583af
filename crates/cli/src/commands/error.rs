use keygate_core::StartError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectStartupError {
    #[error("{0}")]
    NotInitialized(String),

    #[error("Could not start the server: {0}")]
    StartError(#[from] StartError),
}
