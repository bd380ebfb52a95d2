use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::engine::errors::EngineError;
use crate::engine::RandomSource;

/// Каноническая колода из 52 карт: ♠, ♥, ♦, ♣; внутри масти 2..A.
pub fn build_deck() -> Vec<Card> {
    Deck::standard_52().cards
}

/// Перемешать колоду на месте источником случайности `rng`.
pub fn shuffle<R: RandomSource>(deck: &mut [Card], rng: &mut R) {
    rng.shuffle(deck);
}

/// Новая перемешанная колода.
pub fn shuffled_deck<R: RandomSource>(rng: &mut R) -> Vec<Card> {
    let mut deck = build_deck();
    shuffle(&mut deck, rng);
    deck
}

/// Раздать `per_hand` карт каждому из `player_count` игроков по кругу:
/// карта с индексом `i` уходит в руку `i % player_count`.
///
/// Хвост колоды за пределами `player_count * per_hand` в раунде не участвует.
pub fn deal_hands(
    deck: &[Card],
    player_count: usize,
    per_hand: usize,
) -> Result<Vec<Vec<Card>>, EngineError> {
    if player_count == 0 {
        return Err(EngineError::InvalidPlayerCount(player_count));
    }

    let needed = player_count * per_hand;
    if needed > deck.len() {
        return Err(EngineError::NotEnoughCards {
            needed,
            available: deck.len(),
        });
    }

    let mut hands = vec![Vec::with_capacity(per_hand); player_count];
    for (i, card) in deck.iter().take(needed).enumerate() {
        hands[i % player_count].push(*card);
    }

    Ok(hands)
}

/// Раздача по классическим правилам - по 13 карт.
pub fn deal(deck: &[Card], player_count: usize) -> Result<Vec<Vec<Card>>, EngineError> {
    deal_hands(deck, player_count, 13)
}
