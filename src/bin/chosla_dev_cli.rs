// src/bin/chosla_dev_cli.rs

use std::sync::Arc;

use chosla_engine::api::{
    Command, CommandResponse, DealCardsCommand, DiscardCommand, GameService, JoinCommand,
    MoveCardToSetCommand, Query, QueryResponse, ScoreMiniRoundCommand,
};
use chosla_engine::config::ServiceConfig;
use chosla_engine::domain::GameState;
use chosla_engine::infra::{logging, DeterministicRng, GameId, GameStore, InMemoryGameStore};

const PLAYERS: [&str; 4] = ["Alice", "Bob", "Carol", "Dave"];
const ROUNDS: usize = 3;

fn main() {
    logging::init();
    println!("chosla_dev_cli: стартуем локальную сессию…");

    // Конфиг можно подложить через CHOSLA_CONFIG, иначе дефолтные правила.
    let config = match std::env::var("CHOSLA_CONFIG") {
        Ok(path) => match ServiceConfig::load(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                println!("[CLI] Не удалось загрузить конфиг {path}: {e}");
                return;
            }
        },
        Err(_) => ServiceConfig::default(),
    };

    let game_id = GameId::new("demo-game");
    let store = InMemoryGameStore::new();

    // Подписчик - как клиентский UI: на каждое изменение перерисовывает сводку.
    let subscription = store.subscribe(
        &game_id,
        Arc::new(|state: &GameState| {
            println!(
                "[SUB] раунд #{} | мини-раунд {} | банк {} | дилер {:?}",
                state.round_number, state.current_mini_round, state.pot, state.dealer
            );
        }),
    );

    let mut service = GameService::new(store.clone(), DeterministicRng::from_seed(42), config);

    for name in PLAYERS {
        run(
            &mut service,
            Command::Join(JoinCommand {
                game_id: game_id.clone(),
                player_name: name.to_string(),
            }),
        );
    }

    // Первую раздачу может сделать кто угодно.
    let mut dealer = PLAYERS[0].to_string();

    for round in 1..=ROUNDS {
        println!();
        println!("================ ROUND {round} | дилер {dealer} =================");

        if let Some(CommandResponse::RoundDealt(settlement)) = run(
            &mut service,
            Command::DealCards(DealCardsCommand {
                game_id: game_id.clone(),
                player_name: dealer.clone(),
            }),
        ) {
            for p in &settlement.payouts {
                println!(
                    "[CLI] {}: побед {}, итог {} → {}",
                    p.player, p.winnings, p.net, p.money_after
                );
                if !p.salami_bonus.is_zero() {
                    println!("[CLI] {} - САЛЯМИ! бонус {}", p.player, p.salami_bonus);
                }
            }
            dealer = settlement.dealer;
        }

        let mini_rounds = service.rules().mini_rounds_per_round as usize;
        for slot in 0..mini_rounds {
            play_mini_round(&mut service, &game_id, slot);
            run(
                &mut service,
                Command::ScoreMiniRound(ScoreMiniRoundCommand {
                    game_id: game_id.clone(),
                }),
            );
        }
    }

    println!();
    println!("================ LEADERBOARD =================");
    if let QueryResponse::Leaderboard(rows) = service.query(&Query::Leaderboard {
        game_id: game_id.clone(),
    }) {
        for row in rows {
            println!("{}. {} – {}", row.place, row.name, row.money);
        }
    }

    subscription.unsubscribe();
    println!("[CLI] Завершение работы dev-CLI.");
}

/// Каждый игрок кладёт в сет `slot` несколько карт с руки; первый ещё и сбрасывает одну.
fn play_mini_round(
    service: &mut GameService<InMemoryGameStore, DeterministicRng>,
    game_id: &GameId,
    slot: usize,
) {
    let state = service.snapshot(game_id).state;

    for (idx, player) in state.players.iter().enumerate() {
        let take = (idx + slot) % 4 + 1;
        for card in player.hand.iter().take(take) {
            run(
                service,
                Command::MoveCardToSet(MoveCardToSetCommand {
                    game_id: game_id.clone(),
                    player_name: player.name.clone(),
                    card: *card,
                    set_index: slot,
                }),
            );
        }

        if idx == 0 {
            if let Some(card) = player.hand.get(take) {
                run(
                    service,
                    Command::Discard(DiscardCommand {
                        game_id: game_id.clone(),
                        player_name: player.name.clone(),
                        card: *card,
                    }),
                );
            }
        }
    }
}

fn run(
    service: &mut GameService<InMemoryGameStore, DeterministicRng>,
    command: Command,
) -> Option<CommandResponse> {
    let name = command.name();
    match service.execute(command) {
        Ok(receipt) => Some(receipt.response),
        Err(e) => {
            println!("[CLI] ОШИБКА в {name}: {e}");
            None
        }
    }
}
