use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::SetIndex;
use crate::infra::ids::GameId;

/// Команда верхнего уровня - всё, что меняет состояние сессии.
///
/// UI-обработчики превращают действия игрока в эти команды и отдают
/// их в `GameService::execute`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Войти в сессию.
    Join(JoinCommand),

    /// Положить карту с руки или из сброса в сет.
    MoveCardToSet(MoveCardToSetCommand),

    /// Сбросить карту с руки.
    Discard(DiscardCommand),

    /// Закрыть раунд и раздать заново.
    DealCards(DealCardsCommand),

    /// Подсчитать текущий мини-раунд.
    ScoreMiniRound(ScoreMiniRoundCommand),
}

impl Command {
    pub fn game_id(&self) -> &GameId {
        match self {
            Command::Join(c) => &c.game_id,
            Command::MoveCardToSet(c) => &c.game_id,
            Command::Discard(c) => &c.game_id,
            Command::DealCards(c) => &c.game_id,
            Command::ScoreMiniRound(c) => &c.game_id,
        }
    }

    /// Короткое имя команды для логов.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Join(_) => "join",
            Command::MoveCardToSet(_) => "move_card_to_set",
            Command::Discard(_) => "discard",
            Command::DealCards(_) => "deal_cards",
            Command::ScoreMiniRound(_) => "score_mini_round",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct JoinCommand {
    pub game_id: GameId,
    pub player_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveCardToSetCommand {
    pub game_id: GameId,
    pub player_name: String,
    pub card: Card,
    /// 0..set_slots.
    pub set_index: SetIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiscardCommand {
    pub game_id: GameId,
    pub player_name: String,
    pub card: Card,
}

/// Раздача от имени игрока `player_name` (проверяется право раздавать).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DealCardsCommand {
    pub game_id: GameId,
    pub player_name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreMiniRoundCommand {
    pub game_id: GameId,
}
