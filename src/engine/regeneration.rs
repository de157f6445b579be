use tracing::{info, warn};

use crate::domain::{MatchId, ParticipantId, RoundIndex, Tournament};
use crate::engine::advancement::{check_chain, generate_next_round};
use crate::engine::{BracketError, RandomSource};

/// Удалить все раунды с индексом строго больше `base_index` (матчи уходят вместе с ними).
///
/// Возвращает количество удалённых раундов.
pub fn truncate_rounds_after(tournament: &mut Tournament, base_index: RoundIndex) -> usize {
    let before = tournament.rounds.len();
    tournament.rounds.retain(|r| r.index <= base_index);
    let removed = before - tournament.rounds.len();

    if removed > 0 {
        info!(
            tournament_id = tournament.id,
            base_index,
            removed,
            "downstream rounds discarded"
        );
    }
    removed
}

/// После правки раунда `base_index`: выкинуть всё после него и заново вывести хвост.
///
/// Если раунд не завершён – после обрезки ничего не строим.
/// Иначе вызываем `generate_next_round`, пока он создаёт раунды
/// и пока новый раунд сам по себе завершён.
///
/// Возвращает индексы созданных раундов.
pub fn regenerate_following_from<R: RandomSource>(
    tournament: &mut Tournament,
    base_index: RoundIndex,
    rng: &mut R,
) -> Result<Vec<RoundIndex>, BracketError> {
    tournament.ensure_active()?;
    if tournament.round(base_index).is_none() {
        return Err(BracketError::RoundNotFound(base_index));
    }

    truncate_rounds_after(tournament, base_index);

    let base = &mut tournament.rounds[base_index as usize];
    base.refresh_completed();
    if !base.completed {
        return Ok(Vec::new());
    }

    // Каждый раунд хотя бы вдвое сокращает поле: раундов не больше, чем участников.
    let max_rounds = tournament.participants.len() + 1;
    let mut created = Vec::new();

    loop {
        if created.len() > max_rounds {
            return Err(BracketError::InconsistentState(
                "regeneration did not terminate".into(),
            ));
        }

        let (index, completed) = match generate_next_round(tournament, rng)? {
            Some(round) => (round.index, round.completed),
            None => break,
        };
        created.push(index);

        if !completed {
            break;
        }
    }

    Ok(created)
}

/// Проставить (или перезаписать) победителя матча и перегенерировать всё после его раунда.
///
/// Победитель обязан быть участником матча; для bye – его единственным участником.
pub fn set_match_winner<R: RandomSource>(
    tournament: &mut Tournament,
    round_index: RoundIndex,
    match_id: MatchId,
    winner: ParticipantId,
    rng: &mut R,
) -> Result<Vec<RoundIndex>, BracketError> {
    tournament.ensure_active()?;
    check_chain(tournament)?;

    let round = tournament
        .round(round_index)
        .ok_or(BracketError::RoundNotFound(round_index))?;
    let m = round
        .match_by_id(match_id)
        .ok_or(BracketError::MatchNotFound {
            round_index,
            match_id,
        })?;

    let allowed = if m.is_bye {
        m.bye_participant() == Some(winner)
    } else {
        m.involves(winner)
    };
    if !allowed {
        return Err(BracketError::InvalidParticipant {
            participant_id: winner,
        });
    }

    let previous = m.winner;
    if previous.is_some() && previous != Some(winner) {
        warn!(
            tournament_id = tournament.id,
            round_index,
            match_id,
            ?previous,
            winner,
            "match result corrected"
        );
    }

    if let Some(m) = tournament.rounds[round_index as usize].match_by_id_mut(match_id) {
        m.winner = Some(winner);
    }

    regenerate_following_from(tournament, round_index, rng)
}
