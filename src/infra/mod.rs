//! Инфраструктурный слой вокруг движка Chosla:
//! - RNG-реализации для движка;
//! - граница с внешним хранилищем документов (снапшоты, подписки, коммиты);
//! - политика повторов при конфликтах;
//! - идентификаторы сессий и логирование.

pub mod ids;
pub mod logging;
pub mod persistence;
pub mod retry;
pub mod rng;

pub use ids::*;
pub use persistence::*;
pub use retry::*;
pub use rng::*;
