//! Операции сессии над явным значением `GameState`.
//!
//! Каждая операция берёт текущее состояние по ссылке и возвращает НОВОЕ
//! состояние вместе с итогом. При ошибке вход не тронут, частичных
//! изменений не бывает.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::card::Card;
use crate::domain::game::GameState;
use crate::domain::player::Player;
use crate::domain::rules::GameRules;
use crate::domain::SetIndex;
use crate::engine::dealing::{deal_hands, shuffled_deck};
use crate::engine::errors::EngineError;
use crate::engine::round::{self, MiniRoundResult, RoundSettlement};
use crate::engine::validation::{validate_can_deal, validate_player_name, validate_set_index};
use crate::engine::RandomSource;

/// Новое состояние + итог операции.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition<T> {
    pub state: GameState,
    pub outcome: T,
}

impl<T> Transition<T> {
    fn new(state: GameState, outcome: T) -> Self {
        Self { state, outcome }
    }
}

/// Результат входа в сессию.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    /// Игрок с таким именем уже есть - ничего не меняем.
    AlreadyPresent,
}

/// Войти в сессию под именем `name`. Повторный вход - no-op.
pub fn join(
    state: &GameState,
    rules: &GameRules,
    name: &str,
) -> Result<Transition<JoinOutcome>, EngineError> {
    let name = validate_player_name(name)?;

    if state.has_player(name) {
        return Ok(Transition::new(state.clone(), JoinOutcome::AlreadyPresent));
    }
    if state.player_count() >= rules.max_players {
        return Err(EngineError::TableFull(rules.max_players));
    }

    let mut next = state.clone();
    next.players.push(Player::new(name, rules));
    debug!(player = name, players = next.player_count(), "player joined");

    Ok(Transition::new(next, JoinOutcome::Joined))
}

/// Переложить карту с руки (или из сброса) в сет `set_index`.
pub fn move_card_to_set(
    state: &GameState,
    rules: &GameRules,
    player_name: &str,
    card: Card,
    set_index: SetIndex,
) -> Result<Transition<()>, EngineError> {
    validate_set_index(set_index, rules)?;

    let mut next = state.clone();
    let player = next
        .player_mut(player_name)
        .ok_or_else(|| EngineError::PlayerNotFound(player_name.to_string()))?;

    if let Some(pos) = player.hand.iter().position(|c| *c == card) {
        player.hand.remove(pos);
    } else if player.discard == Some(card) {
        player.discard = None;
    } else {
        return Err(EngineError::CardNotHeld {
            player: player_name.to_string(),
            card,
        });
    }

    // Сетов может быть меньше, если документ пришёл со старыми правилами.
    if player.sets.len() < rules.set_slots {
        player.sets.resize(rules.set_slots, Vec::new());
    }
    player.sets[set_index].push(card);

    Ok(Transition::new(next, ()))
}

/// Сбросить карту с руки. Прежняя сброшенная карта (если была)
/// возвращается на руку и отдаётся в итоге.
pub fn discard(
    state: &GameState,
    player_name: &str,
    card: Card,
) -> Result<Transition<Option<Card>>, EngineError> {
    let mut next = state.clone();
    let player = next
        .player_mut(player_name)
        .ok_or_else(|| EngineError::PlayerNotFound(player_name.to_string()))?;

    let pos = player
        .hand
        .iter()
        .position(|c| *c == card)
        .ok_or_else(|| EngineError::CardNotHeld {
            player: player_name.to_string(),
            card,
        })?;

    player.hand.remove(pos);
    let previous = player.discard.replace(card);
    if let Some(prev) = previous {
        player.hand.push(prev);
    }

    Ok(Transition::new(next, previous))
}

/// Новая раздача от имени `actor`: расчёт прошлого раунда, смена дилера,
/// свежие руки.
pub fn deal_cards<R: RandomSource>(
    state: &GameState,
    rules: &GameRules,
    actor: &str,
    rng: &mut R,
) -> Result<Transition<RoundSettlement>, EngineError> {
    validate_can_deal(state, rules, actor)?;

    let deck = shuffled_deck(rng);
    let hands = deal_hands(&deck, state.player_count(), rules.cards_per_hand)?;

    let mut next = state.clone();
    let settlement = round::settle_round(&mut next, rules, hands, actor)?;

    Ok(Transition::new(next, settlement))
}

/// Подсчитать текущий мини-раунд.
pub fn score_mini_round(
    state: &GameState,
    rules: &GameRules,
) -> Result<Transition<MiniRoundResult>, EngineError> {
    let mut next = state.clone();
    let result = round::score_mini_round(&mut next, rules)?;
    Ok(Transition::new(next, result))
}

/// Может ли игрок сейчас раздавать.
pub fn can_deal(state: &GameState, rules: &GameRules, player_name: &str) -> bool {
    validate_can_deal(state, rules, player_name).is_ok()
}
