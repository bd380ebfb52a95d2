//! Движок раунда: подсчёт мини-раундов и расчёт раунда при новой раздаче.
//!
//! Функции здесь работают по `&mut GameState` и вызываются только после
//! валидации, поэтому не падают на полпути.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::game::GameState;
use crate::domain::rules::GameRules;
use crate::domain::MiniRoundIndex;
use crate::engine::comparator::best_set_index;
use crate::engine::errors::EngineError;
use crate::engine::positions::{next_dealer, salami_winner};
use crate::engine::validation::validate_can_score;

/// Итог одного мини-раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MiniRoundResult {
    /// Какой мини-раунд подсчитан.
    pub mini_round: MiniRoundIndex,
    pub winner: String,
    /// Победы победителя после этого мини-раунда.
    pub winner_winnings: u8,
    pub pot_after: Chips,
}

/// Расчёт одного игрока при новой раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payout {
    pub player: String,
    pub winnings: u8,
    pub salami_bonus: Chips,
    pub ante: Chips,
    /// winnings + salami_bonus - ante.
    pub net: Chips,
    pub money_after: Chips,
}

/// Итог закрытия раунда и новой раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSettlement {
    pub payouts: Vec<Payout>,
    pub salami: Option<String>,
    pub dealer: String,
    pub round_number: u64,
}

/// Подсчитать текущий мини-раунд:
/// - старший сет с индексом `current_mini_round` выигрывает;
/// - победителю +1 победа;
/// - в банк по фишке с каждого игрока;
/// - мини-раунд сдвигается, победитель становится кандидатом в дилеры.
pub fn score_mini_round(
    state: &mut GameState,
    rules: &GameRules,
) -> Result<MiniRoundResult, EngineError> {
    validate_can_score(state, rules)?;

    let mini_round = state.current_mini_round;
    let slot = mini_round as usize;

    let winner_idx = best_set_index(
        state
            .players
            .iter()
            .map(|p| p.sets.get(slot).map(Vec::as_slice).unwrap_or(&[])),
    )
    .ok_or(EngineError::NoPlayers)?;

    let player_count = state.player_count();
    let winner = &mut state.players[winner_idx];
    winner.winnings += 1;
    let winner_name = winner.name.clone();
    let winner_winnings = winner.winnings;

    state.pot += Chips::from(player_count);
    state.current_mini_round += 1;
    state.next_dealer = Some(winner_name.clone());

    debug!(
        mini_round,
        winner = %winner_name,
        winner_winnings,
        pot = state.pot.0,
        "mini-round scored"
    );

    Ok(MiniRoundResult {
        mini_round,
        winner: winner_name,
        winner_winnings,
        pot_after: state.pot,
    })
}

/// Бонус "салями": по фишке с каждого соперника, если игрок взял все мини-раунды.
pub fn salami_bonus(winnings: u8, player_count: usize, rules: &GameRules) -> Chips {
    if winnings == rules.mini_rounds_per_round {
        Chips::from(player_count.saturating_sub(1))
    } else {
        Chips::ZERO
    }
}

/// Закрыть раунд и раздать новые руки.
///
/// `hands` - по одной руке на игрока в порядке входа.
pub fn settle_round(
    state: &mut GameState,
    rules: &GameRules,
    hands: Vec<Vec<Card>>,
    triggered_by: &str,
) -> Result<RoundSettlement, EngineError> {
    let player_count = state.player_count();
    if hands.len() != player_count {
        return Err(EngineError::InvalidPlayerCount(hands.len()));
    }

    // Дилера выбираем до обнуления побед.
    let salami = salami_winner(state, rules).map(str::to_string);
    let dealer = next_dealer(state, rules, triggered_by);

    let mut payouts = Vec::with_capacity(player_count);
    for (player, hand) in state.players.iter_mut().zip(hands) {
        let bonus = salami_bonus(player.winnings, player_count, rules);
        let net = Chips::from(player.winnings as usize) + bonus - rules.ante;
        player.money += net;

        payouts.push(Payout {
            player: player.name.clone(),
            winnings: player.winnings,
            salami_bonus: bonus,
            ante: rules.ante,
            net,
            money_after: player.money,
        });

        player.reset_for_round(hand, rules.set_slots);
    }

    state.dealer = Some(dealer.clone());
    state.next_dealer = None;
    state.current_mini_round = 0;
    state.pot = Chips::ZERO;
    state.round_number += 1;

    info!(
        round = state.round_number,
        dealer = %dealer,
        salami = ?salami,
        players = player_count,
        "round settled, new hands dealt"
    );

    Ok(RoundSettlement {
        payouts,
        salami,
        dealer,
        round_number: state.round_number,
    })
}
