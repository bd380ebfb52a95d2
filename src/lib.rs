//! Движок карточной игры Chosla.
//!
//! Одна общая сессия на небольшую компанию игроков: колода и раздача,
//! сеты по мини-раундам, подсчёт с тай-брейком, бонус "салями", банк,
//! передача дилерства между раундами.
//!
//! Слои:
//! - `domain` - данные (карты, игроки, состояние сессии, правила);
//! - `engine` - чистые переходы состояния;
//! - `infra` - RNG, граница с хранилищем документов, повторы, логи;
//! - `api` - команды/запросы/DTO и сервис поверх хранилища;
//! - `config` - загрузка конфигурации.

pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod infra;

pub use api::{ApiError, Command, GameService, Query, QueryResponse};
pub use config::ServiceConfig;
pub use domain::{Card, GameRules, GameState, Player};
pub use engine::{EngineError, ErrorKind, RandomSource};
pub use infra::{GameId, GameStore, InMemoryGameStore};
