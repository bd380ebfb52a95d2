use std::cmp::Ordering;

use crate::domain::card::Card;

/// Сравнение двух сетов мини-раунда.
///
/// Сначала длина: более длинный сет всегда старше. При равной длине -
/// лексикографическое сравнение склеенных меток карт (`"2♠3♠"` и т.п.).
/// Это не покерная оценка руки, а просто детерминированный полный порядок,
/// чтобы у ничьих был однозначный исход.
pub fn compare_sets(a: &[Card], b: &[Card]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| concat_labels(a).cmp(&concat_labels(b)))
}

/// Индекс старшего сета.
///
/// При полностью равных максимумах побеждает последний из них
/// (так же, как устойчивая сортировка по возрастанию с выбором хвоста).
pub fn best_set_index<'a, I>(sets: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a [Card]>,
{
    sets.into_iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| compare_sets(a, b))
        .map(|(idx, _)| idx)
}

fn concat_labels(set: &[Card]) -> String {
    set.iter().map(Card::label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::{Rank, Suit};

    #[test]
    fn equal_maxima_pick_the_last_one() {
        let empty: Vec<Card> = Vec::new();
        let sets = [empty.as_slice(), empty.as_slice(), empty.as_slice()];
        assert_eq!(best_set_index(sets), Some(2));
    }

    #[test]
    fn labels_are_concatenated_before_comparing() {
        assert_eq!(
            concat_labels(&[
                Card::new(Rank::Ten, Suit::Hearts),
                Card::new(Rank::Jack, Suit::Clubs)
            ]),
            "10♥J♣"
        );
    }
}
