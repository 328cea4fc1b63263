use std::sync::Arc;

use repository::Repository;
use serde::Deserialize;
use tokio::task::JoinHandle;
use tracing::info;

mod snapshot;

pub struct State {
    repository: Repository,
    config: Config,
}

impl State {
    pub fn new(repository: Repository, config: Config) -> Self {
        Self { repository, config }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub pause_secs: u64,
    pub snapshot_ttl_secs: u64,
}

pub async fn serve(
    repository: Repository,
    config_name: &str,
) -> anyhow::Result<Vec<JoinHandle<anyhow::Result<()>>>> {
    info!(task = "start insights sync");

    let config = util::load_config(config_name)?;
    let config: Config = util::section(&config, "insights")?;

    let state = Arc::new(State::new(repository, config));

    Ok(snapshot::spawn_service_to_refresh_snapshot(state))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_config() {
        // Arrange
        let raw = r#"
            [insights]
            pause_secs = 30
            snapshot_ttl_secs = 120
        "#;
        let table: toml::Table = toml::from_str(raw).unwrap();

        // Act
        let config: Config = util::section(&table, "insights").unwrap();

        // Assert
        assert_eq!(config.pause_secs, 30);
        assert_eq!(config.snapshot_ttl_secs, 120);
    }
}
