use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::rules::GameRules;
use crate::domain::MiniRoundIndex;

/// Общее состояние одной игровой сессии - единственный разделяемый агрегат.
///
/// Документ создаётся неявно при первом входе игрока и никогда не удаляется.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    /// Игроки в порядке входа.
    pub players: Vec<Player>,

    /// Кто имеет право на следующую раздачу. None - первой раздачи ещё не было.
    pub dealer: Option<String>,

    /// Победитель последнего мини-раунда - запасной кандидат в дилеры.
    pub next_dealer: Option<String>,

    /// Сколько мини-раундов уже подсчитано в текущем раунде.
    pub current_mini_round: MiniRoundIndex,

    /// Фишки, накопленные за текущий раунд.
    pub pot: Chips,

    /// Сколько раздач сыграно в сессии (для отображения).
    pub round_number: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn player_index(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == name)
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.name == name)
    }

    pub fn has_player(&self, name: &str) -> bool {
        self.player_index(name).is_some()
    }

    /// Раунд завершён, когда подсчитаны все мини-раунды.
    pub fn is_round_complete(&self, rules: &GameRules) -> bool {
        self.current_mini_round >= rules.mini_rounds_per_round
    }

    pub fn is_dealer(&self, name: &str) -> bool {
        self.dealer.as_deref() == Some(name)
    }

    /// Победы игроков в текущем раунде, в порядке входа.
    pub fn winnings(&self) -> Vec<u8> {
        self.players.iter().map(|p| p.winnings).collect()
    }

    /// Все карты в игре у всех игроков (руки, сеты, сбросы).
    pub fn cards_in_play(&self) -> Vec<Card> {
        self.players
            .iter()
            .flat_map(|p| p.cards_in_play().copied())
            .collect()
    }
}
