use std::env;
use std::str::FromStr;

use game_core::EvaluationAlgorithm;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub auth_dev_mode: bool,
    pub algorithm: EvaluationAlgorithm,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT", "3000")?,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://word_game.db?mode=rwc".to_string()),
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| "secret".to_string()),
            auth_dev_mode: parse_var("AUTH_DEV_MODE", "false")?,
            algorithm: parse_algorithm(
                &env::var("EVALUATION_ALGORITHM").unwrap_or_else(|_| "naive-contains".to_string()),
            )?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_url: "sqlite://word_game.db?mode=rwc".to_string(),
            jwt_secret: "secret".to_string(),
            auth_dev_mode: false,
            algorithm: EvaluationAlgorithm::NaiveContains,
        }
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: &str) -> Result<T, ConfigError> {
    let value = env::var(name).unwrap_or_else(|_| default.to_string());
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue { name, value })
}

pub fn parse_algorithm(value: &str) -> Result<EvaluationAlgorithm, ConfigError> {
    [EvaluationAlgorithm::NaiveContains, EvaluationAlgorithm::Standard]
        .into_iter()
        .find(|algorithm| algorithm.name() == value)
        .ok_or_else(|| ConfigError::InvalidValue {
            name: "EVALUATION_ALGORITHM",
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm() {
        assert_eq!(
            parse_algorithm("naive-contains").unwrap(),
            EvaluationAlgorithm::NaiveContains
        );
        assert_eq!(parse_algorithm("standard").unwrap(), EvaluationAlgorithm::Standard);

        let err = parse_algorithm("wordle").unwrap_err();
        assert_eq!(err.to_string(), "Invalid EVALUATION_ALGORITHM: wordle");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert!(!config.auth_dev_mode);
        assert_eq!(config.algorithm, EvaluationAlgorithm::NaiveContains);
    }
}
