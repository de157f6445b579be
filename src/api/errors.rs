use serde::{Deserialize, Serialize};

use crate::domain::{TournamentError, TournamentId};
use crate::engine::BracketError;

/// Ошибки внешнего API (то, что отдаём приложению-обёртке).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (чужой участник, пустое имя, дубль).
    BadRequest(String),

    /// Турнир не найден.
    TournamentNotFound(TournamentId),

    /// Команда не может быть выполнена в текущем состоянии.
    InvalidCommand(String),

    /// Внутренняя ошибка: состояние сетки испорчено.
    Internal(String),
}

impl From<TournamentError> for ApiError {
    fn from(err: TournamentError) -> Self {
        match err {
            TournamentError::TournamentNotFound { tournament_id } => {
                ApiError::TournamentNotFound(tournament_id)
            }
            TournamentError::NoActiveTournament { .. } | TournamentError::TournamentRetired { .. } => {
                ApiError::InvalidCommand(err.to_string())
            }
            TournamentError::DuplicateParticipant { .. }
            | TournamentError::EmptyName
            | TournamentError::InvalidConfig(_) => ApiError::BadRequest(err.to_string()),
        }
    }
}

impl From<BracketError> for ApiError {
    fn from(err: BracketError) -> Self {
        match err {
            BracketError::Tournament(inner) => inner.into(),
            BracketError::InconsistentState(_) => ApiError::Internal(err.to_string()),
            BracketError::PrematureAdvancement(_)
            | BracketError::StageClosed(_)
            | BracketError::WrongMode { .. } => ApiError::InvalidCommand(err.to_string()),
            BracketError::InvalidParticipant { .. }
            | BracketError::RoundNotFound(_)
            | BracketError::MatchNotFound { .. }
            | BracketError::GroupMatchNotFound(_)
            | BracketError::TriadNotFound(_)
            | BracketError::ScoreOutOfRange { .. } => ApiError::BadRequest(err.to_string()),
        }
    }
}
