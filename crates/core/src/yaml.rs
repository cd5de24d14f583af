use std::{env, fs::File, io::Read, path::Path};

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiConfig {
    pub port: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub allowed_origins: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SetupConfig {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    pub api_config: ApiConfig,
}

#[derive(Error, Debug)]
pub enum ReadYamlError {
    #[error("Can not find yaml")]
    CanNotFindYaml,

    #[error("Can not read yaml")]
    CanNotReadYaml,

    #[error("Setup config is invalid yaml and does not match the struct - {0}")]
    SetupConfigInvalidYaml(String),

    #[error("Environment variable {0} not found")]
    EnvironmentVariableNotFound(String),

    #[error("Invalid environment variable pattern: {0}")]
    InvalidEnvVariablePattern(#[from] regex::Error),
}

/// Substitutes `${VAR}` environment variable references in YAML content.
fn substitute_env_variables(contents: &str) -> Result<String, ReadYamlError> {
    let re = Regex::new(r"\$\{([^}]+)\}")?;

    let mut missing: Option<String> = None;
    let result = re.replace_all(contents, |caps: &Captures| match env::var(&caps[1]) {
        Ok(value) => value,
        Err(_) => {
            missing.get_or_insert_with(|| caps[1].to_string());
            String::new()
        }
    });

    match missing {
        Some(name) => Err(ReadYamlError::EnvironmentVariableNotFound(name)),
        None => Ok(result.into_owned()),
    }
}

pub fn read(file_path: &Path, raw_yaml: bool) -> Result<SetupConfig, ReadYamlError> {
    let mut file = File::open(file_path).map_err(|_| ReadYamlError::CanNotFindYaml)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|_| ReadYamlError::CanNotReadYaml)?;

    let substituted_contents =
        if raw_yaml { contents } else { substitute_env_variables(&contents)? };

    let config: SetupConfig = serde_yaml::from_str(&substituted_contents)
        .map_err(|e| ReadYamlError::SetupConfigInvalidYaml(e.to_string()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_setup_config() {
        let yaml = "name: gateway\napi_config:\n  port: 8080\n";

        let config: SetupConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.name, "gateway");
        assert_eq!(config.api_config.port, 8080);
        assert!(config.api_config.host.is_none());
        assert!(config.api_config.allowed_origins.is_none());
    }

    #[test]
    fn test_substitute_env_variables() {
        env::set_var("KEYGATE_TEST_PORT", "9999");
        let result = substitute_env_variables("port: ${KEYGATE_TEST_PORT}").unwrap();
        assert_eq!(result, "port: 9999");
    }

    #[test]
    fn test_substitute_env_variables_missing() {
        let result = substitute_env_variables("port: ${KEYGATE_TEST_UNSET_VARIABLE}");
        assert!(matches!(result, Err(ReadYamlError::EnvironmentVariableNotFound(name)) if name == "KEYGATE_TEST_UNSET_VARIABLE"));
    }

    #[test]
    fn test_read_raw_yaml_skips_substitution() {
        let path = env::temp_dir().join("keygate-read-raw.yaml");
        std::fs::write(&path, "name: ${NOT_AN_ENV_VAR}\napi_config:\n  port: 8080\n").unwrap();

        let config = read(&path, true).unwrap();
        assert_eq!(config.name, "${NOT_AN_ENV_VAR}");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_read_missing_yaml() {
        let path = env::temp_dir().join("keygate-does-not-exist.yaml");
        assert!(matches!(read(&path, true), Err(ReadYamlError::CanNotFindYaml)));
    }
}
