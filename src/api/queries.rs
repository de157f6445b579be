use serde::{Deserialize, Serialize};

use crate::domain::{Category, TournamentError, TournamentId};
use crate::engine::{all_group_matches_played, groups_in_code_order, triads_completed};
use crate::infra::mapping::{group_to_dto, tournament_to_dto};
use crate::infra::persistence::TournamentStorage;
use crate::tournament::TournamentLobby;

use super::dto::{GroupDto, TournamentViewDto};
use super::errors::ApiError;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Турнир целиком.
    GetTournament { tournament_id: TournamentId },

    /// Активный турнир категории.
    GetActive { category: Category },

    /// Все турниры (включая Retired).
    ListTournaments,

    /// Сыграны ли все матчи всех групп.
    AllGroupMatchesPlayed { tournament_id: TournamentId },

    /// Все ли триады получили победителя.
    TriadsCompleted { tournament_id: TournamentId },

    /// Таблицы групп.
    GroupStandings { tournament_id: TournamentId },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Tournament(TournamentViewDto),
    Tournaments(Vec<TournamentViewDto>),
    Flag(bool),
    Groups(Vec<GroupDto>),
}

pub fn run_query<S: TournamentStorage>(
    lobby: &TournamentLobby<S>,
    query: Query,
) -> Result<QueryResponse, ApiError> {
    let load = |tournament_id: TournamentId| {
        lobby
            .get(tournament_id)
            .ok_or(TournamentError::TournamentNotFound { tournament_id })
    };

    let response = match query {
        Query::GetTournament { tournament_id } => {
            QueryResponse::Tournament(tournament_to_dto(&load(tournament_id)?))
        }
        Query::GetActive { category } => {
            let t = lobby
                .active_for(category)
                .ok_or(TournamentError::NoActiveTournament { category })?;
            QueryResponse::Tournament(tournament_to_dto(&t))
        }
        Query::ListTournaments => {
            QueryResponse::Tournaments(lobby.all().iter().map(tournament_to_dto).collect())
        }
        Query::AllGroupMatchesPlayed { tournament_id } => {
            QueryResponse::Flag(all_group_matches_played(&load(tournament_id)?))
        }
        Query::TriadsCompleted { tournament_id } => {
            QueryResponse::Flag(triads_completed(&load(tournament_id)?))
        }
        Query::GroupStandings { tournament_id } => {
            let t = load(tournament_id)?;
            QueryResponse::Groups(
                groups_in_code_order(&t)
                    .into_iter()
                    .map(|g| group_to_dto(&t, g))
                    .collect(),
            )
        }
    };

    Ok(response)
}

/// То же, что `run_query`, но ответ сразу в JSON (для внешнего приложения).
pub fn run_query_json<S: TournamentStorage>(
    lobby: &TournamentLobby<S>,
    query: Query,
) -> Result<String, ApiError> {
    let response = run_query(lobby, query)?;
    serde_json::to_string(&response).map_err(|e| ApiError::Internal(e.to_string()))
}
