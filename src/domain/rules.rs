use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::deck::DECK_SIZE;

/// Правила сессии Chosla.
///
/// Значения по умолчанию - классическая партия: 100 фишек на входе,
/// анте 4 за раздачу, по 13 карт, 5 слотов под сеты, 4 мини-раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameRules {
    /// Стартовый баланс игрока при входе в сессию.
    pub starting_money: Chips,
    /// Фиксированная плата за раунд, списывается при каждой раздаче.
    /// Не зависит от числа игроков.
    pub ante: Chips,
    /// Сколько карт получает каждый игрок.
    pub cards_per_hand: usize,
    /// Сколько сетов (слотов) у каждого игрока.
    pub set_slots: usize,
    /// Сколько мини-раундов разыгрывается до завершения раунда.
    pub mini_rounds_per_round: u8,
    /// Минимум игроков для подсчёта мини-раунда.
    pub min_players_to_score: usize,
    /// Максимум игроков за столом (все руки должны влезть в одну колоду).
    pub max_players: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            starting_money: Chips(100),
            ante: Chips(4),
            cards_per_hand: 13,
            set_slots: 5,
            mini_rounds_per_round: 4,
            min_players_to_score: 2,
            max_players: 4,
        }
    }
}

/// Некорректная конфигурация правил.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("Размер руки должен быть больше нуля")]
    EmptyHand,

    #[error("{players} игроков по {per_hand} карт не помещаются в колоду из {deck} карт")]
    DeckTooSmall {
        players: usize,
        per_hand: usize,
        deck: usize,
    },

    #[error("Слотов под сеты ({slots}) меньше, чем мини-раундов ({mini_rounds})")]
    NotEnoughSetSlots { slots: usize, mini_rounds: u8 },

    #[error("Для подсчёта нужно хотя бы 2 игрока, задано {0}")]
    TooFewPlayersToScore(usize),

    #[error("Анте не может быть отрицательным")]
    NegativeAnte,
}

impl GameRules {
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.cards_per_hand == 0 {
            return Err(RulesError::EmptyHand);
        }
        if self.max_players * self.cards_per_hand > DECK_SIZE {
            return Err(RulesError::DeckTooSmall {
                players: self.max_players,
                per_hand: self.cards_per_hand,
                deck: DECK_SIZE,
            });
        }
        if self.set_slots < self.mini_rounds_per_round as usize {
            return Err(RulesError::NotEnoughSetSlots {
                slots: self.set_slots,
                mini_rounds: self.mini_rounds_per_round,
            });
        }
        if self.min_players_to_score < 2 {
            return Err(RulesError::TooFewPlayersToScore(self.min_players_to_score));
        }
        if self.ante.is_negative() {
            return Err(RulesError::NegativeAnte);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_are_valid() {
        assert_eq!(GameRules::default().validate(), Ok(()));
    }

    #[test]
    fn five_players_do_not_fit_into_one_deck() {
        let rules = GameRules {
            max_players: 5,
            ..GameRules::default()
        };
        assert!(matches!(
            rules.validate(),
            Err(RulesError::DeckTooSmall { players: 5, .. })
        ));
    }
}
