use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::rules::GameRules;

/// Игрок сессии. Ключ игрока - его отображаемое имя, отдельного id нет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    /// Карты на руке (другие игроки их не видят).
    pub hand: Vec<Card>,
    /// Ровно `set_slots` сетов, по одному на мини-раунд.
    /// В пределах раунда карты в сет только добавляются.
    pub sets: Vec<Vec<Card>>,
    /// Не больше одной сброшенной карты.
    pub discard: Option<Card>,
    pub money: Chips,
    /// Сколько мини-раундов выиграно в текущем раунде.
    pub winnings: u8,
}

impl Player {
    /// Новый игрок с дефолтами из правил: пустая рука, пустые сеты,
    /// стартовый баланс, ноль побед.
    pub fn new(name: impl Into<String>, rules: &GameRules) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            sets: empty_sets(rules.set_slots),
            discard: None,
            money: rules.starting_money,
            winnings: 0,
        }
    }

    /// "Салями" - игрок взял все мини-раунды раунда.
    pub fn is_salami(&self, rules: &GameRules) -> bool {
        self.winnings == rules.mini_rounds_per_round
    }

    /// Держит ли игрок карту на руке или в сбросе.
    pub fn holds(&self, card: &Card) -> bool {
        self.hand.contains(card) || self.discard.as_ref() == Some(card)
    }

    /// Все карты игрока в игре: рука, сеты, сброс.
    pub fn cards_in_play(&self) -> impl Iterator<Item = &Card> + '_ {
        self.hand
            .iter()
            .chain(self.sets.iter().flatten())
            .chain(self.discard.iter())
    }

    /// Сброс к началу нового раунда: новая рука, пустые сеты и сброс,
    /// счётчик побед обнулён.
    pub fn reset_for_round(&mut self, hand: Vec<Card>, set_slots: usize) {
        self.hand = hand;
        self.sets = empty_sets(set_slots);
        self.discard = None;
        self.winnings = 0;
    }
}

pub fn empty_sets(slots: usize) -> Vec<Vec<Card>> {
    vec![Vec::new(); slots]
}
