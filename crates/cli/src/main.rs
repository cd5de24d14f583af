use std::{env, path::PathBuf, str::FromStr};

use clap::Parser;
use keygate_core::{load_env_from_project_path, setup_info_logger};

use crate::{
    cli_interface::{Cli, Commands},
    commands::start,
    error::CliError,
};

mod cli_interface;
mod commands;
mod console;
mod error;

use console::print_error_message;

fn resolve_path(override_path: &Option<String>) -> Result<PathBuf, String> {
    let path = match override_path {
        Some(path) => {
            PathBuf::from_str(path).map_err(|_| format!("Invalid path provided: '{}'", path))?
        }
        None => env::current_dir().map_err(|_| "Failed to get current directory.".to_string())?,
    };

    path.canonicalize().map_err(|e| format!("Failed to resolve path '{}': {}", path.display(), e))
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    setup_info_logger();

    match &cli.command {
        Commands::Start { path } => {
            let resolved_path = resolve_path(path).inspect_err(|e| print_error_message(e))?;
            load_env_from_project_path(&resolved_path);

            start::handle_start(&resolved_path).await?;
        }
    }

    Ok(())
}
