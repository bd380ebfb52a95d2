use crate::domain::game::GameState;
use crate::domain::rules::GameRules;

/// Игрок, взявший все мини-раунды раунда (первый по порядку входа).
pub fn salami_winner<'a>(state: &'a GameState, rules: &GameRules) -> Option<&'a str> {
    state
        .players
        .iter()
        .find(|p| p.is_salami(rules))
        .map(|p| p.name.as_str())
}

/// Кто раздаёт следующим:
/// - "салями", если такой есть;
/// - иначе победитель последнего мини-раунда (`next_dealer`);
/// - иначе тот, кто запустил раздачу.
pub fn next_dealer(state: &GameState, rules: &GameRules, triggered_by: &str) -> String {
    salami_winner(state, rules)
        .or(state.next_dealer.as_deref())
        .unwrap_or(triggered_by)
        .to_string()
}
