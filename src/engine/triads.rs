use tracing::info;

use crate::domain::{
    ParticipantId, Round, Tournament, TournamentMode, Triad, FINAL_ROUND_NAME,
    TRIAD_SIZE,
};
use crate::engine::knockout::push_round;
use crate::engine::seeding::shuffle_participants;
use crate::engine::{BracketError, RandomSource};

fn ensure_triad_mode(tournament: &Tournament) -> Result<(), BracketError> {
    match tournament.mode() {
        TournamentMode::Triads => Ok(()),
        other => Err(BracketError::WrongMode {
            expected: TournamentMode::Triads.label(),
            found: other.label(),
        }),
    }
}

/// Перемешать участников и разложить по триадам (последняя может быть неполной).
///
/// Возвращает количество триад (0 – участников нет).
pub fn create_triads<R: RandomSource>(
    tournament: &mut Tournament,
    rng: &mut R,
) -> Result<usize, BracketError> {
    tournament.ensure_active()?;
    ensure_triad_mode(tournament)?;

    if tournament.has_started() {
        return Err(BracketError::StageClosed("triads already built"));
    }

    let shuffled = shuffle_participants(&tournament.participants.ids(), rng);
    tournament.triads = shuffled
        .chunks(TRIAD_SIZE)
        .enumerate()
        .map(|(i, chunk)| Triad::from_chunk(i as u32, chunk))
        .collect();

    info!(
        tournament_id = tournament.id,
        triads = tournament.triads.len(),
        "triads created"
    );
    Ok(tournament.triads.len())
}

/// Записать победителя триады. Победитель – один из присутствующих участников.
pub fn record_triad_winner(
    tournament: &mut Tournament,
    triad_index: u32,
    winner: ParticipantId,
) -> Result<&Triad, BracketError> {
    tournament.ensure_active()?;
    ensure_triad_mode(tournament)?;

    if !tournament.rounds.is_empty() {
        return Err(BracketError::StageClosed(
            "triad results are locked once the knockout stage is seeded",
        ));
    }

    let pos = tournament
        .triads
        .iter()
        .position(|t| t.index == triad_index)
        .ok_or(BracketError::TriadNotFound(triad_index))?;

    if !tournament.triads[pos].has_member(winner) {
        return Err(BracketError::InvalidParticipant {
            participant_id: winner,
        });
    }

    tournament.triads[pos].winner = Some(winner);
    info!(
        tournament_id = tournament.id,
        triad_index,
        winner,
        "triad judged"
    );
    Ok(&tournament.triads[pos])
}

/// Все ли триады получили победителя. Без триад – `false`.
pub fn triads_completed(tournament: &Tournament) -> bool {
    !tournament.triads.is_empty() && tournament.triads.iter().all(Triad::is_judged)
}

/// Название раунда, посеянного из победителей триад.
pub(crate) fn triad_round_name(winners: usize) -> String {
    match winners {
        2 => FINAL_ROUND_NAME.to_string(),
        3 | 4 => "Semifinales".to_string(),
        _ => "Ronda 1".to_string(),
    }
}

/// Посеять плей-офф из победителей триад.
///
/// Меньше двух победителей – сетка не нужна, `Ok(None)`.
pub fn seed_knockout_from_triads<'t, R: RandomSource>(
    tournament: &'t mut Tournament,
    rng: &mut R,
) -> Result<Option<&'t Round>, BracketError> {
    tournament.ensure_active()?;
    ensure_triad_mode(tournament)?;

    if !tournament.rounds.is_empty() {
        return Err(BracketError::StageClosed("knockout bracket already exists"));
    }
    if !triads_completed(tournament) {
        return Err(BracketError::PrematureAdvancement("triad set"));
    }

    let winners: Vec<ParticipantId> = tournament.triads.iter().filter_map(|t| t.winner).collect();
    if winners.len() < 2 {
        return Ok(None);
    }

    let shuffled = shuffle_participants(&winners, rng);
    let name = triad_round_name(shuffled.len());
    Ok(Some(push_round(tournament, 0, name, &shuffled)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triad_round_names() {
        assert_eq!(triad_round_name(2), "Final - Oro");
        assert_eq!(triad_round_name(3), "Semifinales");
        assert_eq!(triad_round_name(4), "Semifinales");
        assert_eq!(triad_round_name(5), "Ronda 1");
    }
}
