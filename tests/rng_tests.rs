//! RNG tests for chosla-engine
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие колод
//! - что shuffle() - перестановка (ничего не теряет и не дублирует)
//! - Fisher–Yates по подсунутому источнику индексов
//! - работу build_deck + shuffle + deal

use std::collections::HashSet;

use chosla_engine::domain::Card;
use chosla_engine::engine::{build_deck, deal, shuffle, RandomSource};
use chosla_engine::infra::{DeterministicRng, SystemRng};

/// Источник, который всегда возвращает 0: каждый шаг меняет i и 0.
struct AlwaysZero;

impl RandomSource for AlwaysZero {
    fn next_index(&mut self, _upper: usize) -> usize {
        0
    }
}

/// Источник, который всегда возвращает верхнюю границу: swap(i, i) - ничего не меняет.
struct AlwaysUpper {
    calls: Vec<usize>,
}

impl RandomSource for AlwaysUpper {
    fn next_index(&mut self, upper: usize) -> usize {
        self.calls.push(upper);
        upper
    }
}

//
// TEST 1 - DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(123);
    let mut r2 = DeterministicRng::from_seed(123);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
}

//
// TEST 2 - different seeds produce different shuffle
//
#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_seed(111);
    let mut r2 = DeterministicRng::from_seed(222);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_ne!(a, b, "Different seeds must produce different shuffle");
}

//
// TEST 3 - shuffle is a permutation of the deck
//
#[test]
fn shuffle_is_a_permutation() {
    let mut rng = DeterministicRng::from_seed(555);

    let mut deck = build_deck();
    shuffle(&mut deck, &mut rng);

    assert_eq!(deck.len(), 52);
    let unique: HashSet<Card> = deck.iter().copied().collect();
    let canonical: HashSet<Card> = build_deck().into_iter().collect();
    assert_eq!(unique, canonical, "Shuffled deck must hold the same 52 cards");
    assert_ne!(deck, build_deck());
}

//
// TEST 4 - Fisher–Yates walks from the last index down, drawing from [0, i]
//
#[test]
fn fisher_yates_draws_from_last_index_down() {
    let mut rng = AlwaysUpper { calls: Vec::new() };
    let mut v: Vec<u32> = (0..5).collect();
    rng.shuffle(&mut v);

    assert_eq!(rng.calls, vec![4, 3, 2, 1]);
    assert_eq!(v, vec![0, 1, 2, 3, 4]);

    // Всегда j = 0: [0,1,2,3] -> swap(3,0) -> [3,1,2,0] -> swap(2,0) -> [2,1,3,0]
    //            -> swap(1,0) -> [1,2,3,0]
    let mut w: Vec<u32> = (0..4).collect();
    AlwaysZero.shuffle(&mut w);
    assert_eq!(w, vec![1, 2, 3, 0]);
}

//
// TEST 5 - shuffling empty / single-element slices is a no-op
//
#[test]
fn shuffle_of_tiny_slices_does_not_panic() {
    let mut rng = DeterministicRng::from_seed(1);

    let mut empty: Vec<Card> = Vec::new();
    rng.shuffle(&mut empty);
    assert!(empty.is_empty());

    let mut one = vec![7u8];
    rng.shuffle(&mut one);
    assert_eq!(one, vec![7]);
}

//
// TEST 6 - SystemRng keeps the multiset intact
//
#[test]
fn system_rng_shuffle_keeps_all_cards() {
    let mut sys = SystemRng::default();
    let mut deck = build_deck();
    shuffle(&mut deck, &mut sys);

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), 52);
}

//
// TEST 7 - deal: 1..=4 players, 13 cards each, no duplicates
//
#[test]
fn deal_gives_thirteen_unique_cards_to_each_player() {
    let mut rng = DeterministicRng::from_seed(999);
    let mut deck = build_deck();
    shuffle(&mut deck, &mut rng);

    for players in 1..=4 {
        let hands = deal(&deck, players).unwrap();
        assert_eq!(hands.len(), players);
        assert!(hands.iter().all(|h| h.len() == 13));

        let all: HashSet<Card> = hands.iter().flatten().copied().collect();
        assert_eq!(all.len(), players * 13);

        // Карта i уходит игроку i % players.
        for (i, card) in deck.iter().take(players * 13).enumerate() {
            assert!(hands[i % players].contains(card));
        }
    }
}
