use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::{EngineError, ErrorKind};
use crate::infra::persistence::StoreError;

/// Ошибки внешнего API (то, что отдаём клиенту).
///
/// Любая из них означает, что общее состояние не изменилось;
/// клиент показывает ошибку и, для `Conflict`, может повторить.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Карта или игрок не найдены.
    #[error("not found: {0}")]
    NotFound(String),

    /// Действие не положено этому игроку сейчас.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Нет участников для операции.
    #[error("empty: {0}")]
    Empty(String),

    /// Запись проиграла гонку и повторы кончились.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Внутренняя ошибка сервера.
    #[error("internal: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ApiError::InvalidArgument(_) => Some(ErrorKind::InvalidArgument),
            ApiError::NotFound(_) => Some(ErrorKind::NotFound),
            ApiError::PermissionDenied(_) => Some(ErrorKind::PermissionDenied),
            ApiError::Empty(_) => Some(ErrorKind::Empty),
            ApiError::Conflict(_) => Some(ErrorKind::Conflict),
            ApiError::Internal(_) => None,
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let msg = err.to_string();
        match err.kind() {
            ErrorKind::InvalidArgument => ApiError::InvalidArgument(msg),
            ErrorKind::NotFound => ApiError::NotFound(msg),
            ErrorKind::PermissionDenied => ApiError::PermissionDenied(msg),
            ErrorKind::Empty => ApiError::Empty(msg),
            ErrorKind::Conflict => ApiError::Conflict(msg),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict { .. } => ApiError::Conflict(err.to_string()),
        }
    }
}
