//! Доменная модель Chosla: карты, колода, фишки, игроки, состояние сессии, правила.

pub mod card;
pub mod chips;
pub mod deck;
pub mod game;
pub mod player;
pub mod rules;

/// Номер мини-раунда внутри раунда (0..=mini_rounds_per_round).
pub type MiniRoundIndex = u8;

/// Индекс сета игрока (0..set_slots).
pub type SetIndex = usize;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use game::*;
pub use player::*;
pub use rules::*;
