use crate::domain::game::GameState;
use crate::domain::rules::GameRules;
use crate::domain::SetIndex;
use crate::engine::errors::EngineError;

/// Проверить имя игрока при входе. Имя сохраняется как есть,
/// пробелы по краям отклоняются.
pub fn validate_player_name(name: &str) -> Result<&str, EngineError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(EngineError::EmptyPlayerName);
    }
    if trimmed.len() != name.len() {
        return Err(EngineError::PaddedPlayerName(name.to_string()));
    }
    Ok(name)
}

pub fn validate_set_index(index: SetIndex, rules: &GameRules) -> Result<(), EngineError> {
    if index >= rules.set_slots {
        return Err(EngineError::InvalidSetIndex {
            index,
            slots: rules.set_slots,
        });
    }
    Ok(())
}

/// Может ли `actor` сделать следующую раздачу.
///
/// Первая раздача (дилера ещё нет) - любой игрок сессии.
/// Дальше - только текущий дилер и только после завершения раунда.
pub fn validate_can_deal(
    state: &GameState,
    rules: &GameRules,
    actor: &str,
) -> Result<(), EngineError> {
    if state.players.is_empty() {
        return Err(EngineError::NoPlayers);
    }
    if !state.has_player(actor) {
        return Err(EngineError::PlayerNotFound(actor.to_string()));
    }

    if state.dealer.is_none() {
        return Ok(());
    }
    if !state.is_round_complete(rules) {
        return Err(EngineError::RoundNotComplete);
    }
    if !state.is_dealer(actor) {
        return Err(EngineError::NotYourDeal(actor.to_string()));
    }
    Ok(())
}

/// Можно ли подсчитать очередной мини-раунд.
pub fn validate_can_score(state: &GameState, rules: &GameRules) -> Result<(), EngineError> {
    let actual = state.player_count();
    if actual == 0 {
        return Err(EngineError::NoPlayers);
    }
    if actual < rules.min_players_to_score {
        return Err(EngineError::NotEnoughPlayers {
            required: rules.min_players_to_score,
            actual,
        });
    }
    if state.is_round_complete(rules) {
        return Err(EngineError::RoundComplete);
    }
    Ok(())
}
