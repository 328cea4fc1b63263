use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;
use toml::{map::Map, Value};

pub fn workspace_dir() -> PathBuf {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .unwrap()
        .stdout;
    let cargo_path = Path::new(std::str::from_utf8(&output).unwrap().trim());
    cargo_path.parent().unwrap().to_path_buf()
}

pub fn load_config(config_name: &str) -> anyhow::Result<Map<String, Value>> {
    let workspace_dir = workspace_dir();
    let config = std::fs::read_to_string(
        workspace_dir.join(format!("{}.toml", config_name)),
    )?;

    let config = toml::from_str::<Map<String, Value>>(&config)?;

    Ok(config)
}

pub fn load_env() -> anyhow::Result<Map<String, Value>> {
    let workspace_dir = workspace_dir();
    let secrets =
        std::fs::read_to_string(workspace_dir.join("Secrets.dev.toml"))
            .context("failed to read Secrets.dev.toml")?;

    toml::from_str::<Map<String, Value>>(&secrets)
        .context("failed to parse Secrets.dev.toml")
}

pub fn section<T: DeserializeOwned>(
    config: &Map<String, Value>,
    name: &str,
) -> anyhow::Result<T> {
    let section = config
        .get(name)
        .with_context(|| format!("failed to get {} config", name))?;

    section
        .clone()
        .try_into()
        .with_context(|| format!("failed to parse {} config", name))
}

pub fn secret(
    secrets: &Map<String, Value>,
    name: &str,
) -> anyhow::Result<String> {
    let secret = secrets
        .get(name)
        .with_context(|| format!("{} was not found", name))?
        .as_str()
        .with_context(|| format!("{} is not a string", name))?;

    Ok(secret.to_string())
}

#[cfg(test)]
mod test {
    use serde::Deserialize;
    use toml::{map::Map, Value};

    use crate::{secret, section};

    #[derive(Debug, PartialEq, Deserialize)]
    struct Sample {
        pause_secs: u64,
        origins: Vec<String>,
    }

    #[test]
    fn test_section() {
        // Arrange
        let raw = r#"
[sample]
pause_secs = 30
origins = ["http://localhost:5173"]
"#;
        let config = toml::from_str::<Map<String, Value>>(raw).unwrap();

        // Act
        let sample = section::<Sample>(&config, "sample").unwrap();

        // Assert
        assert_eq!(
            sample,
            Sample {
                pause_secs: 30,
                origins: vec!["http://localhost:5173".to_string()],
            }
        );
    }

    #[test]
    fn test_section_is_missing() {
        // Arrange
        let config = Map::new();

        // Act
        let sample = section::<Sample>(&config, "sample");

        // Assert
        assert!(sample.is_err());
    }

    #[test]
    fn test_secret() {
        // Arrange
        let raw = r#"CONFIG = "Dev""#;
        let secrets = toml::from_str::<Map<String, Value>>(raw).unwrap();

        // Act
        let config = secret(&secrets, "CONFIG").unwrap();

        // Assert
        assert_eq!(config, "Dev");
    }

    #[test]
    fn test_secret_is_not_a_string() {
        // Arrange
        let raw = "RETRIES = 3";
        let secrets = toml::from_str::<Map<String, Value>>(raw).unwrap();

        // Act
        let config = secret(&secrets, "RETRIES");

        // Assert
        assert!(config.is_err());
    }
}
