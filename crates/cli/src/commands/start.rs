use std::path::PathBuf;

use keygate_core::{keygate_info, start};

use crate::commands::error::ProjectStartupError;

pub async fn handle_start(project_path: &PathBuf) -> Result<(), ProjectStartupError> {
    keygate_info!("Loading from path {:?}", project_path);
    let keygate_yaml_path = project_path.join("keygate.yaml");
    if !keygate_yaml_path.exists() {
        return Err(ProjectStartupError::NotInitialized(
            "Not in a keygate project directory. Please run this command from your project root."
                .to_string(),
        ));
    }

    keygate_info!("Starting keygate...");

    start(project_path).await?;

    Ok(())
}
