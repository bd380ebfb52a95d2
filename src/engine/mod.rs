//! Движок Chosla: колода и раздача, сравнение сетов, мини-раунды, расчёт раунда.
//!
//! Высокоуровневые операции живут в `session`:
//!   - `join` – войти в сессию
//!   - `move_card_to_set` / `discard` – ходы картами
//!   - `score_mini_round` – подсчитать мини-раунд
//!   - `deal_cards` – закрыть раунд и раздать заново

pub mod comparator;
pub mod dealing;
pub mod errors;
pub mod positions;
pub mod round;
pub mod session;
pub mod validation;

pub use comparator::{best_set_index, compare_sets};
pub use dealing::{build_deck, deal, deal_hands, shuffle};
pub use errors::{EngineError, ErrorKind};
pub use round::{MiniRoundResult, Payout, RoundSettlement};
pub use session::{
    can_deal, deal_cards, discard, join, move_card_to_set, score_mini_round, JoinOutcome,
    Transition,
};

/// RNG интерфейс для engine.
/// Реализации лежат в infra (обёртки над `rand`), тесты подсовывают свои.
pub trait RandomSource {
    /// Равномерное целое из `[0, upper]` включительно.
    fn next_index(&mut self, upper: usize) -> usize;

    /// Fisher–Yates: идём от последнего индекса вниз, на шаге `i`
    /// меняем местами `i` и случайный `j` из `[0, i]`.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_index(i);
            slice.swap(i, j);
        }
    }
}
