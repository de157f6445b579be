use std::collections::HashSet;

use tracing::info;

use crate::domain::{
    round_name, Match, ParticipantId, Round, RoundIndex, Tournament, TournamentMode,
    FINAL_ROUND_NAME,
};
use crate::engine::seeding::{pair_with_bye, shuffle_participants};
use crate::engine::{BracketError, RandomSource};

/// Название первого раунда для `count` участников.
pub(crate) fn initial_round_name(count: usize) -> String {
    if count == 2 {
        FINAL_ROUND_NAME.to_string()
    } else {
        round_name(count, 0)
    }
}

/// Создать раунд из уже упорядоченного списка и положить его в турнир.
///
/// Пары идут по порядку списка, bye (если есть) – последним матчем.
pub(crate) fn push_round<'t>(
    tournament: &'t mut Tournament,
    index: RoundIndex,
    name: String,
    ordered: &[ParticipantId],
) -> &'t Round {
    let (pairs, bye) = pair_with_bye(ordered);

    let mut matches = Vec::with_capacity(pairs.len() + 1);
    for (a, b) in pairs {
        matches.push(Match::pair(tournament.allocate_match_id(), a, b));
    }
    if let Some(p) = bye {
        matches.push(Match::bye(tournament.allocate_match_id(), p));
    }

    let round = Round::new(index, name, matches);
    info!(
        tournament_id = tournament.id,
        round_index = round.index,
        round_name = %round.name,
        matches = round.matches.len(),
        bye = bye.is_some(),
        "round created"
    );

    tournament.rounds.push(round);
    &tournament.rounds[tournament.rounds.len() - 1]
}

/// Посев первого раунда плей-офф из произвольного списка участников.
///
/// Перемешивает список и строит раунд 0. Пустой список – ничего не создаём.
pub(crate) fn seed_round_zero<'t, R: RandomSource>(
    tournament: &'t mut Tournament,
    seeds: &[ParticipantId],
    rng: &mut R,
) -> Result<Option<&'t Round>, BracketError> {
    if !tournament.rounds.is_empty() {
        return Err(BracketError::StageClosed("knockout bracket already exists"));
    }
    if seeds.is_empty() {
        return Ok(None);
    }

    let shuffled = shuffle_participants(seeds, rng);
    let name = initial_round_name(shuffled.len());
    Ok(Some(push_round(tournament, 0, name, &shuffled)))
}

/// Первый раунд плей-офф из всех зарегистрированных участников.
pub fn build_initial_round<'t, R: RandomSource>(
    tournament: &'t mut Tournament,
    rng: &mut R,
) -> Result<Option<&'t Round>, BracketError> {
    tournament.ensure_active()?;

    if tournament.mode() != TournamentMode::Knockout {
        return Err(BracketError::WrongMode {
            expected: TournamentMode::Knockout.label(),
            found: tournament.mode().label(),
        });
    }

    let seeds = tournament.participants.ids();
    seed_round_zero(tournament, &seeds, rng)
}

/// Первый раунд плей-офф из внешнего упорядоченного списка
/// (например, рейтинг по времени или квалифицированные из другого этапа).
///
/// Каждый id должен принадлежать турниру и встречаться один раз.
pub fn build_knockout_from_seeds<'t, R: RandomSource>(
    tournament: &'t mut Tournament,
    seeds: &[ParticipantId],
    rng: &mut R,
) -> Result<Option<&'t Round>, BracketError> {
    tournament.ensure_active()?;

    let mut seen = HashSet::with_capacity(seeds.len());
    for &id in seeds {
        if !tournament.participants.contains(id) || !seen.insert(id) {
            return Err(BracketError::InvalidParticipant { participant_id: id });
        }
    }

    seed_round_zero(tournament, seeds, rng)
}
