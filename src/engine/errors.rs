use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Card, SetIndex};

/// Класс ошибки - то, по чему вызывающий решает, что делать дальше.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Кривые входные данные (пустое имя, индекс сета вне диапазона и т.п.).
    InvalidArgument,
    /// Карта/игрок не найдены там, где ожидались.
    NotFound,
    /// Действие не положено этому игроку или не в этот момент.
    PermissionDenied,
    /// Операции нужны участники, а их нет.
    Empty,
    /// Конкурентная запись проиграла гонку на границе хранилища.
    Conflict,
}

/// Ошибки игрового движка Chosla.
///
/// Любая такая ошибка означает, что состояние НЕ изменилось.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Имя игрока не может быть пустым")]
    EmptyPlayerName,

    #[error("Имя игрока {0:?} начинается или заканчивается пробелом")]
    PaddedPlayerName(String),

    #[error("За столом уже максимум игроков ({0})")]
    TableFull(usize),

    #[error("Сет с индексом {index} не существует (всего {slots})")]
    InvalidSetIndex { index: SetIndex, slots: usize },

    #[error("Недопустимое количество игроков для раздачи: {0}")]
    InvalidPlayerCount(usize),

    #[error("Не хватает карт: нужно {needed}, в колоде {available}")]
    NotEnoughCards { needed: usize, available: usize },

    #[error("Игрок {0} не найден")]
    PlayerNotFound(String),

    #[error("У игрока {player} нет карты {card}")]
    CardNotHeld { player: String, card: Card },

    #[error("Сейчас не очередь игрока {0} раздавать")]
    NotYourDeal(String),

    #[error("Раунд ещё не завершён")]
    RoundNotComplete,

    #[error("Раунд уже завершён, нужна новая раздача")]
    RoundComplete,

    #[error("В сессии нет ни одного игрока")]
    NoPlayers,

    #[error("Недостаточно игроков: нужно {required}, есть {actual}")]
    NotEnoughPlayers { required: usize, actual: usize },
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::EmptyPlayerName
            | EngineError::PaddedPlayerName(_)
            | EngineError::TableFull(_)
            | EngineError::InvalidSetIndex { .. }
            | EngineError::InvalidPlayerCount(_)
            | EngineError::NotEnoughCards { .. } => ErrorKind::InvalidArgument,

            EngineError::PlayerNotFound(_) | EngineError::CardNotHeld { .. } => ErrorKind::NotFound,

            EngineError::NotYourDeal(_)
            | EngineError::RoundNotComplete
            | EngineError::RoundComplete
            | EngineError::NotEnoughPlayers { .. } => ErrorKind::PermissionDenied,

            EngineError::NoPlayers => ErrorKind::Empty,
        }
    }
}
