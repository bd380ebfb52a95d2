use serde::{Deserialize, Serialize};

use crate::domain::game::GameState;
use crate::domain::player::Player;
use crate::domain::rules::GameRules;
use crate::engine::can_deal;
use crate::infra::ids::GameId;

use super::dto::{GameViewDto, LeaderboardEntryDto, PlayerViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Состояние сессии глазами `viewer` (None - наблюдатель без руки).
    GetGame {
        game_id: GameId,
        viewer: Option<String>,
    },

    /// Таблица лидеров по деньгам.
    Leaderboard { game_id: GameId },

    /// Может ли игрок сейчас раздавать.
    CanDeal {
        game_id: GameId,
        player_name: String,
    },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Game(GameViewDto),
    Leaderboard(Vec<LeaderboardEntryDto>),
    CanDeal(bool),
}

/// Собрать DTO сессии. Руку видно только самому `viewer`.
pub fn build_game_view(
    game_id: &GameId,
    state: &GameState,
    rules: &GameRules,
    viewer: Option<&str>,
) -> GameViewDto {
    let players = state
        .players
        .iter()
        .map(|p| build_player_view(state, p, viewer == Some(p.name.as_str())))
        .collect();

    GameViewDto {
        game_id: game_id.clone(),
        players,
        dealer: state.dealer.clone(),
        next_dealer: state.next_dealer.clone(),
        current_mini_round: state.current_mini_round,
        pot: state.pot,
        round_number: state.round_number,
        round_complete: state.is_round_complete(rules),
        viewer_can_deal: viewer
            .map(|name| can_deal(state, rules, name))
            .unwrap_or(false),
    }
}

fn build_player_view(state: &GameState, player: &Player, is_viewer: bool) -> PlayerViewDto {
    PlayerViewDto {
        name: player.name.clone(),
        hand: if is_viewer {
            Some(player.hand.clone())
        } else {
            None
        },
        hand_size: player.hand.len(),
        sets: player.sets.clone(),
        discard: player.discard,
        money: player.money,
        winnings: player.winnings,
        is_dealer: state.is_dealer(&player.name),
    }
}

/// Игроки по убыванию денег; при равенстве - в порядке входа.
pub fn build_leaderboard(state: &GameState) -> Vec<LeaderboardEntryDto> {
    let mut sorted: Vec<&Player> = state.players.iter().collect();
    sorted.sort_by(|a, b| b.money.cmp(&a.money));

    sorted
        .into_iter()
        .enumerate()
        .map(|(idx, p)| LeaderboardEntryDto {
            place: idx + 1,
            name: p.name.clone(),
            money: p.money,
        })
        .collect()
}
