use tracing::{debug, info};

use crate::domain::{
    compare_group_codes, group_code, Group, GroupMatch, MatchId, ParticipantId, Round,
    TeamStanding, Tournament, TournamentMode, QUALIFIERS_PER_GROUP,
};
use crate::engine::knockout::seed_round_zero;
use crate::engine::{BracketError, RandomSource};

fn max_group_size(tournament: &Tournament) -> Result<usize, BracketError> {
    match tournament.mode() {
        TournamentMode::GroupStage { max_group_size } => Ok(max_group_size),
        other => Err(BracketError::WrongMode {
            expected: "group_stage",
            found: other.label(),
        }),
    }
}

/// Разбить участников на группы по `max_group_size` (в порядке регистрации)
/// и расписать "каждый с каждым" внутри группы.
///
/// Возвращает количество созданных групп (0 – участников нет).
pub fn create_groups(tournament: &mut Tournament) -> Result<usize, BracketError> {
    tournament.ensure_active()?;
    let size = max_group_size(tournament)?;

    if tournament.has_started() {
        return Err(BracketError::StageClosed("group stage already built"));
    }

    let ids = tournament.participants.ids();
    if ids.is_empty() {
        return Ok(0);
    }

    let mut groups = Vec::with_capacity((ids.len() + size - 1) / size);
    for (g, chunk) in ids.chunks(size).enumerate() {
        let standings: Vec<TeamStanding> = chunk
            .iter()
            .map(|&id| TeamStanding::new(id, tournament.participants.name_of(id)))
            .collect();

        let mut matches = Vec::new();
        for i in 0..chunk.len() {
            for j in (i + 1)..chunk.len() {
                matches.push(GroupMatch {
                    id: tournament.allocate_match_id(),
                    home: chunk[i],
                    away: chunk[j],
                    score: None,
                    played: false,
                });
            }
        }

        groups.push(Group {
            code: group_code(g),
            standings,
            matches,
        });
    }

    info!(
        tournament_id = tournament.id,
        groups = groups.len(),
        group_size = size,
        "group stage created"
    );

    let count = groups.len();
    tournament.groups = groups;
    Ok(count)
}

/// Записать счёт матча группы и обновить обе строки таблицы.
///
/// Если матч уже сыгран – сначала откатываем старый счёт, потом применяем новый.
/// После посева плей-офф таблица заморожена.
pub fn record_group_result(
    tournament: &mut Tournament,
    match_id: MatchId,
    goals_home: u32,
    goals_away: u32,
) -> Result<&GroupMatch, BracketError> {
    tournament.ensure_active()?;
    max_group_size(tournament)?;

    if !tournament.rounds.is_empty() {
        return Err(BracketError::StageClosed(
            "group results are locked once the knockout stage is seeded",
        ));
    }

    let (g_idx, m_idx) = tournament
        .groups
        .iter()
        .enumerate()
        .find_map(|(gi, g)| {
            g.matches
                .iter()
                .position(|m| m.id == match_id)
                .map(|mi| (gi, mi))
        })
        .ok_or(BracketError::GroupMatchNotFound(match_id))?;

    let group = &mut tournament.groups[g_idx];
    let fixture = group.matches[m_idx].clone();
    let previous = if fixture.played { fixture.score } else { None };

    // Обе строки считаем заранее, пишем только если обе сошлись.
    let home_row = next_row(group, fixture.home, previous, (goals_home, goals_away))?;
    let away_row = next_row(
        group,
        fixture.away,
        previous.map(|(h, a)| (a, h)),
        (goals_away, goals_home),
    )?;

    for row in [home_row, away_row] {
        if let Some(slot) = group.standing_mut(row.participant_id) {
            *slot = row;
        }
    }

    let m = &mut group.matches[m_idx];
    m.score = Some((goals_home, goals_away));
    m.played = true;

    debug!(
        tournament_id = tournament.id,
        match_id,
        goals_home,
        goals_away,
        corrected = previous.is_some(),
        "group result recorded"
    );

    Ok(&tournament.groups[g_idx].matches[m_idx])
}

fn next_row(
    group: &Group,
    participant: ParticipantId,
    previous: Option<(u32, u32)>,
    current: (u32, u32),
) -> Result<TeamStanding, BracketError> {
    let mut row = group.standing(participant).cloned().ok_or_else(|| {
        BracketError::InconsistentState(format!(
            "group {} has no standing row for participant {}",
            group.code, participant
        ))
    })?;

    if let Some((scored, conceded)) = previous {
        row.revert(scored, conceded);
    }

    row.with_result(current.0, current.1)
        .ok_or(BracketError::ScoreOutOfRange { participant_id: participant })
}

/// Все ли матчи всех групп сыграны. Без групп – `false`.
pub fn all_group_matches_played(tournament: &Tournament) -> bool {
    !tournament.groups.is_empty() && tournament.groups.iter().all(Group::is_complete)
}

/// Группы в порядке кодов ("A", ..., "Z", "AA", ...).
pub fn groups_in_code_order(tournament: &Tournament) -> Vec<&Group> {
    let mut groups: Vec<&Group> = tournament.groups.iter().collect();
    groups.sort_by(|a, b| compare_group_codes(&a.code, &b.code));
    groups
}

/// Таблицы всех групп в порядке кодов, строки – в порядке ранжирования.
pub fn group_standings(tournament: &Tournament) -> Vec<(String, Vec<TeamStanding>)> {
    groups_in_code_order(tournament)
        .into_iter()
        .map(|g| (g.code.clone(), g.ranked().into_iter().cloned().collect()))
        .collect()
}

/// Квалифицированные: топ-2 каждой группы, группы в порядке кодов.
pub fn qualified_from_groups(tournament: &Tournament) -> Vec<ParticipantId> {
    groups_in_code_order(tournament)
        .into_iter()
        .flat_map(|g| g.top(QUALIFIERS_PER_GROUP))
        .collect()
}

/// Посеять плей-офф из квалифицированных групп (только когда все матчи сыграны).
pub fn seed_knockout_from_groups<'t, R: RandomSource>(
    tournament: &'t mut Tournament,
    rng: &mut R,
) -> Result<Option<&'t Round>, BracketError> {
    tournament.ensure_active()?;
    max_group_size(tournament)?;

    if !all_group_matches_played(tournament) {
        return Err(BracketError::PrematureAdvancement("group stage"));
    }

    let qualified = qualified_from_groups(tournament);
    info!(
        tournament_id = tournament.id,
        qualified = qualified.len(),
        "seeding knockout from groups"
    );

    seed_round_zero(tournament, &qualified, rng)
}
