/// Property-based tests for set comparison and dealing using proptest
///
/// These tests check that `compare_sets` is a strict total order over sets
/// and that shuffling/dealing never loses or duplicates a card.
use std::cmp::Ordering;
use std::collections::HashSet;

use chosla_engine::domain::Card;
use chosla_engine::engine::{best_set_index, build_deck, compare_sets, deal, shuffle};
use chosla_engine::infra::DeterministicRng;
use proptest::prelude::*;

// Strategy to generate a set of 0..=max unique cards taken from the deck
fn set_strategy(max: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(build_deck(), 0..=max).prop_shuffle()
}

proptest! {
    #[test]
    fn compare_is_antisymmetric(a in set_strategy(6), b in set_strategy(6)) {
        prop_assert_eq!(compare_sets(&a, &b), compare_sets(&b, &a).reverse());
    }

    #[test]
    fn compare_is_deterministic(a in set_strategy(6), b in set_strategy(6)) {
        prop_assert_eq!(compare_sets(&a, &b), compare_sets(&a, &b));
    }

    #[test]
    fn compare_is_transitive(a in set_strategy(4), b in set_strategy(4), c in set_strategy(4)) {
        if compare_sets(&a, &b) != Ordering::Greater && compare_sets(&b, &c) != Ordering::Greater {
            prop_assert_ne!(compare_sets(&a, &c), Ordering::Greater);
        }
    }

    #[test]
    fn equal_only_for_identical_sets(a in set_strategy(5), b in set_strategy(5)) {
        prop_assert_eq!(compare_sets(&a, &b) == Ordering::Equal, a == b);
    }

    #[test]
    fn longer_set_always_wins(a in set_strategy(6), b in set_strategy(6)) {
        prop_assume!(a.len() != b.len());
        prop_assert_eq!(compare_sets(&a, &b), a.len().cmp(&b.len()));
    }

    #[test]
    fn best_set_is_never_beaten(sets in prop::collection::vec(set_strategy(5), 1..=4)) {
        let best = best_set_index(sets.iter().map(Vec::as_slice)).unwrap();
        for other in &sets {
            prop_assert_ne!(compare_sets(other, &sets[best]), Ordering::Greater);
        }
    }

    #[test]
    fn shuffled_deal_has_no_duplicates(seed in any::<u64>(), players in 1usize..=4) {
        let mut deck = build_deck();
        shuffle(&mut deck, &mut DeterministicRng::from_seed(seed));

        let shuffled: HashSet<Card> = deck.iter().copied().collect();
        prop_assert_eq!(shuffled.len(), 52);

        let hands = deal(&deck, players).unwrap();
        prop_assert_eq!(hands.len(), players);
        prop_assert!(hands.iter().all(|h| h.len() == 13));

        let dealt: HashSet<Card> = hands.iter().flatten().copied().collect();
        prop_assert_eq!(dealt.len(), players * 13);
    }
}
