use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::MiniRoundIndex;
use crate::engine::{JoinOutcome, MiniRoundResult, RoundSettlement};
use crate::infra::ids::GameId;
use crate::infra::persistence::Version;

/// DTO игрока в сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerViewDto {
    pub name: String,
    /// Карты на руке – только для самого игрока.
    pub hand: Option<Vec<Card>>,
    /// Сколько карт на руке (видно всем).
    pub hand_size: usize,
    pub sets: Vec<Vec<Card>>,
    pub discard: Option<Card>,
    pub money: Chips,
    pub winnings: u8,
    pub is_dealer: bool,
}

/// DTO сессии глазами конкретного зрителя.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameViewDto {
    pub game_id: GameId,
    pub players: Vec<PlayerViewDto>,
    pub dealer: Option<String>,
    pub next_dealer: Option<String>,
    pub current_mini_round: MiniRoundIndex,
    pub pot: Chips,
    pub round_number: u64,
    /// Все мини-раунды раунда подсчитаны.
    pub round_complete: bool,
    /// Может ли зритель сейчас раздавать.
    pub viewer_can_deal: bool,
}

/// Строка таблицы лидеров.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardEntryDto {
    /// Место, начиная с 1.
    pub place: usize,
    pub name: String,
    pub money: Chips,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    Joined(JoinOutcome),
    CardMoved,
    /// Сброс принят; внутри - прежняя сброшенная карта, вернувшаяся на руку.
    Discarded(Option<Card>),
    RoundDealt(RoundSettlement),
    MiniRoundScored(MiniRoundResult),
}

/// Ответ на команду + версия документа после неё.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandReceipt {
    pub version: Version,
    pub response: CommandResponse,
}
