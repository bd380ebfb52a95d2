// tests/engine_round_tests.rs
//
// Подсчёт мини-раундов и расчёт раунда:
//  1) старший сет выигрывает, банк растёт на число игроков
//  2) ничья при равных максимумах - последний по порядку входа
//  3) после 4 мини-раундов подсчёт запрещён
//  4) меньше двух игроков - подсчёт запрещён
//  5) салями: +4 +3 -4 у победителя, -4 у остальных
//  6) выбор следующего дилера: салями → next_dealer → инициатор

use chosla_engine::domain::{Card, Chips, GameRules, GameState, Player};
use chosla_engine::engine::round::{salami_bonus, score_mini_round, settle_round};
use chosla_engine::engine::{EngineError, ErrorKind};

// -----------------------------
// ВСПОМОГАТЕЛЬНЫЕ КОНСТРУКТОРЫ
// -----------------------------

fn c(s: &str) -> Card {
    s.parse().expect("valid card label")
}

fn state_with(names: &[&str]) -> (GameState, GameRules) {
    let rules = GameRules::default();
    let mut state = GameState::new();
    for name in names {
        state.players.push(Player::new(*name, &rules));
    }
    (state, rules)
}

fn empty_hands(n: usize) -> Vec<Vec<Card>> {
    vec![Vec::new(); n]
}

#[test]
fn longest_set_wins_the_mini_round() {
    let (mut state, rules) = state_with(&["A", "B", "C"]);
    state.players[0].sets[0] = vec![c("2♠"), c("3♠")];
    state.players[1].sets[0] = vec![c("5♥")];

    let result = score_mini_round(&mut state, &rules).unwrap();

    assert_eq!(result.mini_round, 0);
    assert_eq!(result.winner, "A");
    assert_eq!(result.winner_winnings, 1);
    assert_eq!(result.pot_after, Chips(3));

    assert_eq!(state.players[0].winnings, 1);
    assert_eq!(state.players[1].winnings, 0);
    assert_eq!(state.players[2].winnings, 0);
    assert_eq!(state.pot, Chips(3));
    assert_eq!(state.current_mini_round, 1);
    assert_eq!(state.next_dealer.as_deref(), Some("A"));
}

#[test]
fn mini_round_uses_the_set_at_current_index() {
    let (mut state, rules) = state_with(&["A", "B"]);
    state.current_mini_round = 2;
    // В сете 0 у A длиннее, но считаем сет 2.
    state.players[0].sets[0] = vec![c("2♠"), c("3♠"), c("4♠")];
    state.players[1].sets[2] = vec![c("9♦")];

    let result = score_mini_round(&mut state, &rules).unwrap();
    assert_eq!(result.winner, "B");
    assert_eq!(result.mini_round, 2);
    assert_eq!(state.current_mini_round, 3);
}

#[test]
fn equal_length_sets_use_label_order() {
    let (mut state, rules) = state_with(&["A", "B"]);
    // "K♣" > "2♥" лексикографически ('K' > '2').
    state.players[0].sets[0] = vec![c("K♣")];
    state.players[1].sets[0] = vec![c("2♥")];

    let result = score_mini_round(&mut state, &rules).unwrap();
    assert_eq!(result.winner, "A");
}

#[test]
fn full_tie_goes_to_the_last_joined_player() {
    let (mut state, rules) = state_with(&["A", "B", "C"]);

    let result = score_mini_round(&mut state, &rules).unwrap();
    assert_eq!(result.winner, "C");
}

#[test]
fn scoring_is_rejected_once_the_round_is_complete() {
    let (mut state, rules) = state_with(&["A", "B"]);
    for _ in 0..4 {
        score_mini_round(&mut state, &rules).unwrap();
    }
    assert!(state.is_round_complete(&rules));
    assert_eq!(state.pot, Chips(8));

    let before = state.clone();
    let err = score_mini_round(&mut state, &rules).unwrap_err();
    assert_eq!(err, EngineError::RoundComplete);
    assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    assert_eq!(state, before);

    // Победы ограничены 0..=4.
    assert!(state.players.iter().all(|p| p.winnings <= 4));
}

#[test]
fn scoring_needs_at_least_two_players() {
    let (mut empty, rules) = state_with(&[]);
    let err = score_mini_round(&mut empty, &rules).unwrap_err();
    assert_eq!(err, EngineError::NoPlayers);
    assert_eq!(err.kind(), ErrorKind::Empty);

    let (mut solo, rules) = state_with(&["A"]);
    let err = score_mini_round(&mut solo, &rules).unwrap_err();
    assert_eq!(
        err,
        EngineError::NotEnoughPlayers {
            required: 2,
            actual: 1
        }
    );
    assert_eq!(err.kind(), ErrorKind::PermissionDenied);
    assert_eq!(solo.current_mini_round, 0);
}

#[test]
fn salami_bonus_only_for_a_clean_sweep() {
    let rules = GameRules::default();
    assert_eq!(salami_bonus(4, 4, &rules), Chips(3));
    assert_eq!(salami_bonus(4, 2, &rules), Chips(1));
    assert_eq!(salami_bonus(3, 4, &rules), Chips::ZERO);
    assert_eq!(salami_bonus(0, 4, &rules), Chips::ZERO);
}

#[test]
fn salami_settlement_with_four_players() {
    let (mut state, rules) = state_with(&["A", "B", "C", "D"]);
    state.players[1].winnings = 4;
    state.current_mini_round = 4;
    state.pot = Chips(16);
    state.dealer = Some("A".to_string());
    state.next_dealer = Some("B".to_string());

    let settlement = settle_round(&mut state, &rules, empty_hands(4), "A").unwrap();

    assert_eq!(settlement.salami.as_deref(), Some("B"));
    assert_eq!(settlement.payouts[1].salami_bonus, Chips(3));
    assert_eq!(settlement.payouts[1].net, Chips(3));

    assert_eq!(state.players[1].money, Chips(103));
    for idx in [0, 2, 3] {
        assert_eq!(state.players[idx].money, Chips(96));
        assert_eq!(settlement.payouts[idx].net, Chips(-4));
    }

    // Сброс раунда.
    assert!(state.players.iter().all(|p| p.winnings == 0));
    assert_eq!(state.pot, Chips::ZERO);
    assert_eq!(state.current_mini_round, 0);
    assert_eq!(state.next_dealer, None);
    assert_eq!(state.dealer.as_deref(), Some("B"));
    assert_eq!(state.round_number, 1);
}

#[test]
fn settlement_pays_winnings_and_charges_ante() {
    let (mut state, rules) = state_with(&["A", "B", "C"]);
    state.players[0].winnings = 3;
    state.players[1].winnings = 1;
    state.players[0].discard = Some(c("7♣"));
    state.players[2].sets[1].push(c("8♣"));

    settle_round(&mut state, &rules, empty_hands(3), "C").unwrap();

    assert_eq!(state.players[0].money, Chips(99));
    assert_eq!(state.players[1].money, Chips(97));
    assert_eq!(state.players[2].money, Chips(96));
    assert_eq!(state.players[0].discard, None);
    assert!(state.players[2].sets.iter().all(Vec::is_empty));
    assert!(state.players.iter().all(|p| p.sets.len() == 5));
}

#[test]
fn next_dealer_falls_back_to_last_mini_round_winner_then_trigger() {
    let (mut state, rules) = state_with(&["A", "B", "C"]);
    state.next_dealer = Some("C".to_string());
    let s = settle_round(&mut state, &rules, empty_hands(3), "A").unwrap();
    assert_eq!(s.dealer, "C");
    assert_eq!(s.salami, None);

    // next_dealer сброшен раздачей - теперь дилером станет инициатор.
    let s = settle_round(&mut state, &rules, empty_hands(3), "B").unwrap();
    assert_eq!(s.dealer, "B");
}

#[test]
fn settlement_rejects_mismatched_hands() {
    let (mut state, rules) = state_with(&["A", "B"]);
    let before = state.clone();
    assert!(settle_round(&mut state, &rules, empty_hands(3), "A").is_err());
    assert_eq!(state, before);
}
