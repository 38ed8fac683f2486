use std::fs;

use log::LevelFilter;
use serde_json::Value;

use crate::error::ConfigError;
use crate::game::{DEFAULT_SIZE, MAX_SIZE};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub board_size: usize,
    pub log_file: String,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            board_size: DEFAULT_SIZE,
            log_file: "hex.log".to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Config, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        Config::from_json(&text)
    }

    /// Keys: "BOARD_SIZE", "LOG_FILE", "LOG_LEVEL". Missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Config, ConfigError> {
        let json: Value = serde_json::from_str(text)?;
        if !json.is_object() {
            return Err(ConfigError::Validation("config must be a JSON object".to_string()));
        }
        let mut config = Config::default();

        if let Some(v) = json.get("BOARD_SIZE") {
            let n = v
                .as_u64()
                .ok_or_else(|| ConfigError::Validation(format!("BOARD_SIZE must be a positive integer, got {}", v)))?;
            if n == 0 || n > MAX_SIZE as u64 {
                return Err(ConfigError::Validation(format!("BOARD_SIZE must be between 1 and {}, got {}", MAX_SIZE, n)));
            }
            config.board_size = n as usize;
        }
        if let Some(v) = json.get("LOG_FILE") {
            config.log_file = v
                .as_str()
                .ok_or_else(|| ConfigError::Validation(format!("LOG_FILE must be a string, got {}", v)))?
                .to_string();
        }
        if let Some(v) = json.get("LOG_LEVEL") {
            let level = v
                .as_str()
                .ok_or_else(|| ConfigError::Validation(format!("LOG_LEVEL must be a string, got {}", v)))?;
            config.log_level = level
                .parse::<LevelFilter>()
                .map_err(|_| ConfigError::Validation(format!("unknown LOG_LEVEL '{}'", level)))?;
        }
        info!("config: {:?}", config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn reads_all_keys() {
        let config = Config::from_json(r#"{"BOARD_SIZE": 7, "LOG_FILE": "x.log", "LOG_LEVEL": "debug"}"#).unwrap();
        assert_eq!(config.board_size, 7);
        assert_eq!(config.log_file, "x.log");
        assert_eq!(config.log_level, LevelFilter::Debug);

        let largest = Config::from_json(r#"{"BOARD_SIZE": 1024}"#).unwrap();
        assert_eq!(largest.board_size, MAX_SIZE);
    }

    #[test]
    fn rejects_bad_values() {
        for text in &[
            r#"{"BOARD_SIZE": 0}"#,
            r#"{"BOARD_SIZE": -3}"#,
            r#"{"BOARD_SIZE": 1025}"#,
            r#"{"BOARD_SIZE": 18446744073709551615}"#,
            r#"{"BOARD_SIZE": "11"}"#,
            r#"{"LOG_FILE": 5}"#,
            r#"{"LOG_LEVEL": "loud"}"#,
            "[1, 2]",
        ] {
            match Config::from_json(text) {
                Err(ConfigError::Validation(_)) => {}
                other => panic!("{} gave {:?}", text, other),
            }
        }
        assert!(matches!(Config::from_json("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn missing_file() {
        match Config::load("/nonexistent/hex-config.json") {
            Err(ConfigError::FileRead { path, .. }) => assert_eq!(path, "/nonexistent/hex-config.json"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
