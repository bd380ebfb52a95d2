use tracing::{info, warn};

use crate::config::ServiceConfig;
use crate::domain::game::GameState;
use crate::domain::rules::GameRules;
use crate::engine::{self, EngineError, RandomSource};
use crate::infra::ids::GameId;
use crate::infra::persistence::{GameMutation, GameStore, Snapshot, StoreError};
use crate::infra::retry::{jittered_backoff, RetryPolicy};

use super::commands::Command;
use super::dto::{CommandReceipt, CommandResponse};
use super::errors::ApiError;
use super::queries::{build_game_view, build_leaderboard, Query, QueryResponse};

/// Сервис одной клиентской стороны над общим хранилищем.
///
/// Каждая команда выполняется против ПОСЛЕДНЕГО закоммиченного снапшота:
/// читаем документ с версией, считаем новое состояние движком,
/// коммитим только изменившиеся поля с проверкой версии. При конфликте
/// перечитываем и повторяем с экспоненциальной паузой.
pub struct GameService<S: GameStore, R: RandomSource> {
    store: S,
    rng: R,
    rules: GameRules,
    retry: RetryPolicy,
}

impl<S: GameStore, R: RandomSource> GameService<S, R> {
    pub fn new(store: S, rng: R, config: ServiceConfig) -> Self {
        Self {
            store,
            rng,
            rules: config.rules,
            retry: config.retry,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Последний снапшот; отсутствующий документ - пустое состояние версии 0.
    pub fn snapshot(&self, game_id: &GameId) -> Snapshot {
        self.store.get(game_id).unwrap_or(Snapshot {
            state: GameState::default(),
            version: 0,
        })
    }

    /// Выполнить команду. Ошибки движка возвращаются сразу,
    /// конфликты записи - после исчерпания попыток.
    pub fn execute(&mut self, command: Command) -> Result<CommandReceipt, ApiError> {
        let game_id = command.game_id().clone();
        let attempts = self.retry.max_attempts.max(1);

        for attempt in 1..=attempts {
            let snapshot = self.snapshot(&game_id);
            let (next, response) = self.apply(&snapshot.state, &command)?;

            let mutation = GameMutation::between(&snapshot.state, &next);
            if mutation.is_empty() {
                return Ok(CommandReceipt {
                    version: snapshot.version,
                    response,
                });
            }

            match self.store.commit(&game_id, snapshot.version, mutation) {
                Ok(version) => {
                    info!(
                        game_id = %game_id,
                        command = command.name(),
                        version,
                        attempt,
                        "command committed"
                    );
                    return Ok(CommandReceipt { version, response });
                }
                Err(StoreError::Conflict { expected, actual }) => {
                    warn!(
                        game_id = %game_id,
                        command = command.name(),
                        attempt,
                        expected,
                        actual,
                        "write conflict, re-reading latest state"
                    );
                    if attempt < attempts {
                        let delay = jittered_backoff(
                            &mut rand::thread_rng(),
                            self.retry.backoff_for(attempt),
                        );
                        if !delay.is_zero() {
                            std::thread::sleep(delay);
                        }
                    }
                }
            }
        }

        Err(ApiError::Conflict(format!(
            "command {} on game {game_id} lost {attempts} write races",
            command.name()
        )))
    }

    /// Посчитать новое состояние для команды. Хранилище не трогает.
    fn apply(
        &mut self,
        state: &GameState,
        command: &Command,
    ) -> Result<(GameState, CommandResponse), EngineError> {
        let rules = &self.rules;
        match command {
            Command::Join(c) => {
                let t = engine::join(state, rules, &c.player_name)?;
                Ok((t.state, CommandResponse::Joined(t.outcome)))
            }
            Command::MoveCardToSet(c) => {
                let t = engine::move_card_to_set(
                    state,
                    rules,
                    &c.player_name,
                    c.card,
                    c.set_index,
                )?;
                Ok((t.state, CommandResponse::CardMoved))
            }
            Command::Discard(c) => {
                let t = engine::discard(state, &c.player_name, c.card)?;
                Ok((t.state, CommandResponse::Discarded(t.outcome)))
            }
            Command::DealCards(c) => {
                let t = engine::deal_cards(state, rules, &c.player_name, &mut self.rng)?;
                Ok((t.state, CommandResponse::RoundDealt(t.outcome)))
            }
            Command::ScoreMiniRound(_) => {
                let t = engine::score_mini_round(state, rules)?;
                Ok((t.state, CommandResponse::MiniRoundScored(t.outcome)))
            }
        }
    }

    /// Выполнить запрос "только чтение" по последнему снапшоту.
    pub fn query(&self, query: &Query) -> QueryResponse {
        match query {
            Query::GetGame { game_id, viewer } => {
                let snapshot = self.snapshot(game_id);
                QueryResponse::Game(build_game_view(
                    game_id,
                    &snapshot.state,
                    &self.rules,
                    viewer.as_deref(),
                ))
            }
            Query::Leaderboard { game_id } => {
                QueryResponse::Leaderboard(build_leaderboard(&self.snapshot(game_id).state))
            }
            Query::CanDeal {
                game_id,
                player_name,
            } => QueryResponse::CanDeal(engine::can_deal(
                &self.snapshot(game_id).state,
                &self.rules,
                player_name,
            )),
        }
    }
}
