use std::time::Duration;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// Политика повторов при конфликте записи в хранилище.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RetryPolicy {
    /// Всего попыток, включая первую.
    pub max_attempts: u32,
    /// Задержка перед второй попыткой; дальше удваивается.
    pub base_delay_ms: u64,
    /// Потолок задержки.
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay_ms: 10,
            max_delay_ms: 250,
        }
    }
}

impl RetryPolicy {
    /// Повторы без пауз (для тестов и однопоточного запуска).
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            base_delay_ms: 0,
            max_delay_ms: 0,
        }
    }

    /// Экспоненциальная задержка после неудачной попытки `attempt` (с 1).
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let shift = attempt.saturating_sub(1).min(16);
        let ms = self
            .base_delay_ms
            .saturating_mul(1u64 << shift)
            .min(self.max_delay_ms);
        Duration::from_millis(ms)
    }
}

/// "Equal jitter": задержка в [backoff/2, backoff].
pub fn jittered_backoff(rng: &mut impl RngCore, backoff: Duration) -> Duration {
    let backoff_ms = backoff.as_millis() as u64;
    if backoff_ms <= 1 {
        return backoff;
    }

    let half_ms = backoff_ms / 2;
    let jitter_ms = rng.gen_range(0..=half_ms);
    Duration::from_millis(half_ms.saturating_add(jitter_ms))
}
