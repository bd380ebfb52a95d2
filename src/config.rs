//! Конфигурация сервиса: правила игры + политика повторов.
//!
//! Формат - JSON, любые поля можно опустить:
//!
//! ```json
//! { "rules": { "ante": 4, "starting_money": 100 }, "retry": { "max_attempts": 5 } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::rules::{GameRules, RulesError};
use crate::infra::retry::RetryPolicy;

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceConfig {
    pub rules: GameRules,
    pub retry: RetryPolicy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать конфиг: {0}")]
    Io(#[from] std::io::Error),

    #[error("Не удалось разобрать конфиг: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Некорректные правила: {0}")]
    Rules(#[from] RulesError),

    #[error("max_attempts должен быть больше нуля")]
    ZeroAttempts,
}

impl ServiceConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: ServiceConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rules.validate()?;
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        Ok(())
    }
}
