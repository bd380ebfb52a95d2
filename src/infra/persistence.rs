//! Граница с внешним хранилищем документов.
//!
//! Хранилище держит по одному документу `GameState` на сессию и даёт:
//! чтение снапшота, подписку на изменения и атомарный коммит мутации
//! с проверкой версии (compare-and-swap).

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use thiserror::Error;
use tracing::debug;

use crate::domain::chips::Chips;
use crate::domain::game::GameState;
use crate::domain::player::Player;
use crate::domain::MiniRoundIndex;
use crate::infra::ids::GameId;

/// Версия документа. 0 - документа ещё нет.
pub type Version = u64;

/// Колбэк подписчика: получает каждое закоммиченное состояние.
pub type Listener = Arc<dyn Fn(&GameState) + Send + Sync>;

/// Ошибки хранилища.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Конфликт записи: ожидалась версия {expected}, в хранилище {actual}")]
    Conflict { expected: Version, actual: Version },
}

/// Снапшот документа вместе с версией, на которой он прочитан.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub state: GameState,
    pub version: Version,
}

/// Частичное обновление документа: `None` - поле не трогаем.
///
/// Для `dealer`/`next_dealer` внешний `Option` - "менять ли поле",
/// внутренний - новое значение (в том числе сброс в None).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameMutation {
    pub players: Option<Vec<Player>>,
    pub dealer: Option<Option<String>>,
    pub next_dealer: Option<Option<String>>,
    pub current_mini_round: Option<MiniRoundIndex>,
    pub pot: Option<Chips>,
    pub round_number: Option<u64>,
}

impl GameMutation {
    /// Мутация, заменяющая все поля документа.
    pub fn full(state: &GameState) -> Self {
        Self {
            players: Some(state.players.clone()),
            dealer: Some(state.dealer.clone()),
            next_dealer: Some(state.next_dealer.clone()),
            current_mini_round: Some(state.current_mini_round),
            pot: Some(state.pot),
            round_number: Some(state.round_number),
        }
    }

    /// Только изменившиеся поля между `before` и `after`.
    pub fn between(before: &GameState, after: &GameState) -> Self {
        fn changed<T: PartialEq + Clone>(a: &T, b: &T) -> Option<T> {
            (a != b).then(|| b.clone())
        }

        Self {
            players: changed(&before.players, &after.players),
            dealer: changed(&before.dealer, &after.dealer),
            next_dealer: changed(&before.next_dealer, &after.next_dealer),
            current_mini_round: changed(&before.current_mini_round, &after.current_mini_round),
            pot: changed(&before.pot, &after.pot),
            round_number: changed(&before.round_number, &after.round_number),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Слить мутацию в документ на уровне полей.
    pub fn apply_to(self, state: &mut GameState) {
        if let Some(players) = self.players {
            state.players = players;
        }
        if let Some(dealer) = self.dealer {
            state.dealer = dealer;
        }
        if let Some(next_dealer) = self.next_dealer {
            state.next_dealer = next_dealer;
        }
        if let Some(mini_round) = self.current_mini_round {
            state.current_mini_round = mini_round;
        }
        if let Some(pot) = self.pot {
            state.pot = pot;
        }
        if let Some(round_number) = self.round_number {
            state.round_number = round_number;
        }
    }
}

/// Хэндл подписки. Колбэк снимается `unsubscribe` или при drop хэндла.
#[must_use = "подписка снимается, как только хэндл выброшен"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Контракт внешнего хранилища документов сессий.
pub trait GameStore {
    /// Последний закоммиченный снапшот или None, если документа нет.
    fn get(&self, game_id: &GameId) -> Option<Snapshot>;

    /// Подписка на каждое закоммиченное изменение, в порядке коммитов.
    fn subscribe(&self, game_id: &GameId, on_change: Listener) -> Subscription;

    /// Атомарно применить мутацию, если версия документа всё ещё
    /// `expected_version`. Возвращает новую версию.
    fn commit(
        &self,
        game_id: &GameId,
        expected_version: Version,
        mutation: GameMutation,
    ) -> Result<Version, StoreError>;
}

#[derive(Default)]
struct StoreInner {
    docs: Mutex<HashMap<GameId, Snapshot>>,
    listeners: Mutex<HashMap<GameId, Vec<(u64, Listener)>>>,
    next_listener_id: AtomicU64,
    /// Сериализует коммиты вместе с доставкой уведомлений,
    /// чтобы подписчики видели изменения в порядке коммитов.
    delivery: Mutex<()>,
}

/// In-memory реализация для тестов и локального запуска.
///
/// Колбэки вызываются синхронно внутри `commit` и не должны сами
/// коммитить в то же хранилище.
#[derive(Clone, Default)]
pub struct InMemoryGameStore {
    inner: Arc<StoreInner>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Текущая версия документа (0, если его нет).
    pub fn version(&self, game_id: &GameId) -> Version {
        self.inner
            .docs
            .lock()
            .get(game_id)
            .map(|s| s.version)
            .unwrap_or(0)
    }

    pub fn subscriber_count(&self, game_id: &GameId) -> usize {
        self.inner
            .listeners
            .lock()
            .get(game_id)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

impl GameStore for InMemoryGameStore {
    fn get(&self, game_id: &GameId) -> Option<Snapshot> {
        self.inner.docs.lock().get(game_id).cloned()
    }

    fn subscribe(&self, game_id: &GameId, on_change: Listener) -> Subscription {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .listeners
            .lock()
            .entry(game_id.clone())
            .or_default()
            .push((id, on_change));

        let weak: Weak<StoreInner> = Arc::downgrade(&self.inner);
        let game_id = game_id.clone();
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                if let Some(list) = inner.listeners.lock().get_mut(&game_id) {
                    list.retain(|(lid, _)| *lid != id);
                }
            }
        })
    }

    fn commit(
        &self,
        game_id: &GameId,
        expected_version: Version,
        mutation: GameMutation,
    ) -> Result<Version, StoreError> {
        let _delivery = self.inner.delivery.lock();

        let committed = {
            let mut docs = self.inner.docs.lock();
            let actual = docs.get(game_id).map(|s| s.version).unwrap_or(0);
            if actual != expected_version {
                return Err(StoreError::Conflict {
                    expected: expected_version,
                    actual,
                });
            }

            let doc = docs.entry(game_id.clone()).or_insert_with(|| Snapshot {
                state: GameState::default(),
                version: 0,
            });
            mutation.apply_to(&mut doc.state);
            doc.version += 1;
            doc.clone()
        };

        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .get(game_id)
            .map(|list| list.iter().map(|(_, l)| Arc::clone(l)).collect())
            .unwrap_or_default();

        debug!(
            game_id = %game_id,
            version = committed.version,
            listeners = listeners.len(),
            "game state committed"
        );

        for listener in listeners {
            listener(&committed.state);
        }

        Ok(committed.version)
    }
}
