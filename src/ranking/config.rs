use crate::{ranking::Contender, search::State};
use serde::{Deserialize, Deserializer};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use strum::IntoEnumIterator;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {message}")]
    Invalid { message: String },
}

/// Settings of a batch comparison. Every field has a default, so an empty
/// file is a valid config.
///
/// ```toml
/// trials = 10
/// scramble_moves = 100
/// seed = 42
/// goal = "12345678-"
/// time_limit = "30s"
/// memory_limit_mb = 2048
/// contenders = ["bfs", "astar-manhattan"]
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RankingConfig {
    /// Number of random instances to run every contender on
    pub trials: usize,
    /// Number of random moves used to scramble each instance
    pub scramble_moves: usize,
    /// Seed for the instance generator, random if absent
    pub seed: Option<u64>,
    /// The configuration every instance is scrambled from and solved towards
    pub goal: State,
    /// Time limit of a single search
    #[serde(deserialize_with = "deserialize_duration")]
    pub time_limit: Option<Duration>,
    /// Resident memory, in MiB, above which a search is abandoned
    pub memory_limit_mb: Option<usize>,
    /// The algorithm and heuristic combinations to compare
    pub contenders: Vec<Contender>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            trials: 10,
            scramble_moves: 100,
            seed: None,
            goal: State::goal(),
            time_limit: None,
            memory_limit_mb: None,
            contenders: Contender::iter().collect(),
        }
    }
}

impl RankingConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: RankingConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::Invalid {
                message: "trials must be at least 1".to_string(),
            });
        }
        if self.contenders.is_empty() {
            return Err(ConfigError::Invalid {
                message: "at least one contender is required".to_string(),
            });
        }
        Ok(())
    }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let text: Option<String> = Option::deserialize(deserializer)?;
    text.map(|text| humantime::parse_duration(&text).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = RankingConfig::from_toml("").expect("empty config should parse");
        assert_eq!(config, RankingConfig::default());
        assert_eq!(config.trials, 10);
        assert_eq!(config.scramble_moves, 100);
        assert_eq!(config.contenders.len(), 5);
    }

    #[test]
    fn parses_every_field() {
        let config = RankingConfig::from_toml(
            r#"
            trials = 3
            scramble_moves = 20
            seed = 7
            goal = "-12345678"
            time_limit = "1m 30s"
            memory_limit_mb = 512
            contenders = ["bfs", "astar-manhattan"]
            "#,
        )
        .expect("config should parse");
        assert_eq!(config.trials, 3);
        assert_eq!(config.scramble_moves, 20);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.goal, state("-12345678"));
        assert_eq!(config.time_limit, Some(Duration::from_secs(90)));
        assert_eq!(config.memory_limit_mb, Some(512));
        assert_eq!(
            config.contenders,
            vec![Contender::BreadthFirst, Contender::AStarManhattan]
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            RankingConfig::from_toml(r#"goal = "1234""#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            RankingConfig::from_toml(r#"time_limit = "soon""#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            RankingConfig::from_toml("iterations = 3"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            RankingConfig::from_toml("trials = 0"),
            Err(ConfigError::Invalid { .. })
        ));
        assert!(matches!(
            RankingConfig::from_toml("contenders = []"),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            RankingConfig::from_path(Path::new("/nonexistent/ranking.toml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
