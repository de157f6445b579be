use serde::{Deserialize, Serialize};

use crate::domain::{Category, MatchId, ParticipantId, RoundIndex, TournamentId};

/// DTO участника.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantDto {
    pub participant_id: ParticipantId,
    pub name: String,
}

/// DTO матча плей-офф.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchDto {
    pub match_id: MatchId,
    pub a: Option<ParticipantDto>,
    pub b: Option<ParticipantDto>,
    pub is_bye: bool,
    pub winner: Option<ParticipantDto>,
}

/// DTO раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundDto {
    pub index: RoundIndex,
    pub name: String,
    pub completed: bool,
    pub matches: Vec<MatchDto>,
}

/// Строка таблицы группы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StandingDto {
    pub participant: ParticipantDto,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupMatchDto {
    pub match_id: MatchId,
    pub home: ParticipantDto,
    pub away: ParticipantDto,
    pub goals_home: Option<u32>,
    pub goals_away: Option<u32>,
    pub played: bool,
}

/// DTO группы: таблица уже отсортирована.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupDto {
    pub code: String,
    pub standings: Vec<StandingDto>,
    pub matches: Vec<GroupMatchDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriadDto {
    pub index: u32,
    pub members: Vec<ParticipantDto>,
    pub winner: Option<ParticipantDto>,
}

/// DTO турнира целиком (для экрана сетки).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TournamentViewDto {
    pub tournament_id: TournamentId,
    pub name: String,
    pub category: Category,
    /// Название категории для показа ("Fútbol", "Sumo RC", ...).
    pub category_name: String,
    /// "knockout", "group_stage", "triads".
    pub mode: String,
    /// "Active" или "Retired".
    pub status: String,
    pub participants: Vec<ParticipantDto>,
    pub rounds: Vec<RoundDto>,
    pub groups: Vec<GroupDto>,
    pub triads: Vec<TriadDto>,
    pub champion: Option<ParticipantDto>,
}
