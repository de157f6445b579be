use crate::api::dto::{
    GroupDto, GroupMatchDto, MatchDto, ParticipantDto, RoundDto, StandingDto, TournamentViewDto,
    TriadDto,
};
use crate::domain::{
    Group, Match, ParticipantId, Round, TeamStanding, Tournament, TournamentStatus, Triad,
};
use crate::tournament::TournamentRuntime;

/// Маппинг участника по id. Неизвестный id отдаём с пустым именем.
pub fn participant_dto(tournament: &Tournament, id: ParticipantId) -> ParticipantDto {
    ParticipantDto {
        participant_id: id,
        name: tournament.participants.name_of(id).to_string(),
    }
}

fn opt_participant(tournament: &Tournament, id: Option<ParticipantId>) -> Option<ParticipantDto> {
    id.map(|id| participant_dto(tournament, id))
}

pub fn match_to_dto(tournament: &Tournament, m: &Match) -> MatchDto {
    MatchDto {
        match_id: m.id,
        a: opt_participant(tournament, m.a),
        b: opt_participant(tournament, m.b),
        is_bye: m.is_bye,
        winner: opt_participant(tournament, m.effective_winner()),
    }
}

pub fn round_to_dto(tournament: &Tournament, round: &Round) -> RoundDto {
    RoundDto {
        index: round.index,
        name: round.name.clone(),
        completed: round.completed,
        matches: round
            .matches
            .iter()
            .map(|m| match_to_dto(tournament, m))
            .collect(),
    }
}

fn standing_to_dto(tournament: &Tournament, s: &TeamStanding) -> StandingDto {
    StandingDto {
        participant: participant_dto(tournament, s.participant_id),
        played: s.played,
        wins: s.wins,
        draws: s.draws,
        losses: s.losses,
        goals_for: s.goals_for,
        goals_against: s.goals_against,
        goal_difference: s.goal_difference,
        points: s.points,
    }
}

/// Группа → DTO; строки таблицы в порядке ранжирования.
pub fn group_to_dto(tournament: &Tournament, group: &Group) -> GroupDto {
    GroupDto {
        code: group.code.clone(),
        standings: group
            .ranked()
            .into_iter()
            .map(|s| standing_to_dto(tournament, s))
            .collect(),
        matches: group
            .matches
            .iter()
            .map(|m| GroupMatchDto {
                match_id: m.id,
                home: participant_dto(tournament, m.home),
                away: participant_dto(tournament, m.away),
                goals_home: m.score.map(|(h, _)| h),
                goals_away: m.score.map(|(_, a)| a),
                played: m.played,
            })
            .collect(),
    }
}

pub fn triad_to_dto(tournament: &Tournament, triad: &Triad) -> TriadDto {
    TriadDto {
        index: triad.index,
        members: triad
            .present_members()
            .into_iter()
            .map(|id| participant_dto(tournament, id))
            .collect(),
        winner: opt_participant(tournament, triad.winner),
    }
}

/// Турнир → DTO для экрана сетки.
pub fn tournament_to_dto(tournament: &Tournament) -> TournamentViewDto {
    let status = match tournament.status {
        TournamentStatus::Active => "Active",
        TournamentStatus::Retired => "Retired",
    };

    TournamentViewDto {
        tournament_id: tournament.id,
        name: tournament.config.name.clone(),
        category: tournament.config.category,
        category_name: tournament.config.category.display_name().to_string(),
        mode: tournament.mode().label().to_string(),
        status: status.to_string(),
        participants: tournament
            .participants
            .iter()
            .map(|p| participant_dto(tournament, p.id))
            .collect(),
        rounds: tournament
            .rounds
            .iter()
            .map(|r| round_to_dto(tournament, r))
            .collect(),
        groups: tournament
            .groups
            .iter()
            .map(|g| group_to_dto(tournament, g))
            .collect(),
        triads: tournament
            .triads
            .iter()
            .map(|t| triad_to_dto(tournament, t))
            .collect(),
        champion: opt_participant(tournament, TournamentRuntime::champion(tournament)),
    }
}
