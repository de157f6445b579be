// src/tournament/runtime.rs

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{ParticipantId, RoundIndex, Tournament, TournamentMode};
use crate::engine::{
    self, build_initial_round, generate_next_round, seed_knockout_from_groups,
    seed_knockout_from_triads, BracketError, RandomSource,
};

/// Что произошло в результате `start` / `advance`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StageOutcome {
    /// Участников нет – ничего не создано.
    Nothing,
    RoundCreated { index: RoundIndex, name: String },
    GroupsCreated { groups: usize },
    TriadsCreated { triads: usize },
    /// Дальше раундов нет: турнир решён.
    Decided { champion: Option<ParticipantId> },
}

/// Рантайм-слой над движком: по формату турнира выбирает,
/// какой движок строит первый этап и как из него выходить в плей-офф.
pub struct TournamentRuntime;

impl TournamentRuntime {
    /// Построить первый этап турнира:
    /// - Knockout → раунд 0;
    /// - GroupStage → группы и расписание;
    /// - Triads → триады.
    pub fn start<R: RandomSource>(
        tournament: &mut Tournament,
        rng: &mut R,
    ) -> Result<StageOutcome, BracketError> {
        tournament.ensure_active()?;
        if tournament.has_started() {
            return Err(BracketError::StageClosed("tournament already started"));
        }

        info!(
            tournament_id = tournament.id,
            mode = tournament.mode().label(),
            participants = tournament.participants.len(),
            "starting tournament"
        );

        let outcome = match tournament.mode() {
            TournamentMode::Knockout => match build_initial_round(tournament, rng)? {
                Some(round) => StageOutcome::RoundCreated {
                    index: round.index,
                    name: round.name.clone(),
                },
                None => StageOutcome::Nothing,
            },
            TournamentMode::GroupStage { .. } => match engine::create_groups(tournament)? {
                0 => StageOutcome::Nothing,
                groups => StageOutcome::GroupsCreated { groups },
            },
            TournamentMode::Triads => match engine::create_triads(tournament, rng)? {
                0 => StageOutcome::Nothing,
                triads => StageOutcome::TriadsCreated { triads },
            },
        };

        Ok(outcome)
    }

    /// Продвинуть турнир на один шаг.
    ///
    /// Пока плей-офф нет, для групп и триад это посев плей-офф из первого этапа;
    /// дальше – обычное продвижение раунда.
    pub fn advance<R: RandomSource>(
        tournament: &mut Tournament,
        rng: &mut R,
    ) -> Result<StageOutcome, BracketError> {
        tournament.ensure_active()?;

        if tournament.rounds.is_empty() {
            let seeded = match tournament.mode() {
                TournamentMode::Knockout => {
                    return Err(BracketError::PrematureAdvancement("first round"))
                }
                TournamentMode::GroupStage { .. } => seed_knockout_from_groups(tournament, rng)?,
                TournamentMode::Triads => seed_knockout_from_triads(tournament, rng)?,
            };

            return Ok(match seeded {
                Some(round) => StageOutcome::RoundCreated {
                    index: round.index,
                    name: round.name.clone(),
                },
                None => StageOutcome::Decided {
                    champion: Self::champion(tournament),
                },
            });
        }

        let outcome = match generate_next_round(tournament, rng)? {
            Some(round) => StageOutcome::RoundCreated {
                index: round.index,
                name: round.name.clone(),
            },
            None => StageOutcome::Decided {
                champion: Self::champion(tournament),
            },
        };
        Ok(outcome)
    }

    /// Победитель турнира, если он уже определён.
    ///
    /// Турнир из одной триады решается без плей-офф.
    pub fn champion(tournament: &Tournament) -> Option<ParticipantId> {
        if !tournament.rounds.is_empty() {
            return tournament.champion();
        }

        match (tournament.mode(), tournament.triads.as_slice()) {
            (TournamentMode::Triads, [only]) => only.winner,
            _ => None,
        }
    }
}
