use tracing::{debug, info};

use crate::domain::{round_name, Round, Tournament, FINAL_ROUND_NAME};
use crate::engine::knockout::push_round;
use crate::engine::{BracketError, RandomSource};

/// Проверка цепочки раундов: индексы 0..n без пропусков, матчи корректной формы,
/// участник не встречается дважды в одном раунде.
pub(crate) fn check_chain(tournament: &Tournament) -> Result<(), BracketError> {
    for (pos, round) in tournament.rounds.iter().enumerate() {
        if round.index as usize != pos {
            return Err(BracketError::InconsistentState(format!(
                "round index gap: expected {}, found {}",
                pos, round.index
            )));
        }
        check_round(round)?;
    }
    Ok(())
}

pub(crate) fn check_round(round: &Round) -> Result<(), BracketError> {
    for m in &round.matches {
        m.check_shape().map_err(BracketError::InconsistentState)?;
    }

    let mut ids = round.participant_ids();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    if ids.len() != total {
        return Err(BracketError::InconsistentState(format!(
            "participant appears twice in round {}",
            round.index
        )));
    }
    Ok(())
}

/// Сгенерировать следующий раунд из победителей последнего.
///
/// - последний раунд должен быть полностью решён, иначе `PrematureAdvancement`;
/// - меньше 2 победителей → турнир решён, `Ok(None)`;
/// - ровно 2 → финал "Final - Oro";
/// - иначе перемешиваем, bye последнему при нечётном количестве,
///   название берём из лестницы по числу участников раунда 0.
pub fn generate_next_round<'t, R: RandomSource>(
    tournament: &'t mut Tournament,
    rng: &mut R,
) -> Result<Option<&'t Round>, BracketError> {
    tournament.ensure_active()?;
    check_chain(tournament)?;

    let (next_index, fed, mut winners) = {
        let current = tournament
            .rounds
            .last()
            .ok_or(BracketError::PrematureAdvancement("first round"))?;

        if !current.all_decided() {
            return Err(BracketError::PrematureAdvancement("current round"));
        }

        (
            current.index + 1,
            current.participant_ids().len(),
            current.winners(),
        )
    };

    // Каждый этап сокращает поле.
    if winners.len() >= 2 && winners.len() >= fed {
        return Err(BracketError::InconsistentState(format!(
            "round {} did not reduce the field ({} -> {})",
            next_index - 1,
            fed,
            winners.len()
        )));
    }

    if let Some(current) = tournament.rounds.last_mut() {
        current.completed = true;
    }

    if winners.len() < 2 {
        info!(
            tournament_id = tournament.id,
            champion = ?winners.first(),
            "bracket decided"
        );
        return Ok(None);
    }

    let name = if winners.len() == 2 {
        FINAL_ROUND_NAME.to_string()
    } else {
        rng.shuffle(&mut winners);
        let seeded = tournament.rounds[0].participant_ids().len();
        round_name(seeded, next_index)
    };

    debug!(
        tournament_id = tournament.id,
        next_index,
        winners = winners.len(),
        "advancing"
    );

    Ok(Some(push_round(tournament, next_index, name, &winners)))
}
