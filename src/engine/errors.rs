use crate::domain::{MatchId, ParticipantId, RoundIndex, TournamentError};

use thiserror::Error;

/// Ошибки движка сетки.
///
/// Все проверяются до любой записи: операция либо применяется целиком,
/// либо отклоняется без изменений.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BracketError {
    #[error("Participant {participant_id} is not a member of this match or triad")]
    InvalidParticipant { participant_id: ParticipantId },

    #[error("Cannot advance yet: {0} is not complete")]
    PrematureAdvancement(&'static str),

    #[error("Inconsistent bracket state: {0}")]
    InconsistentState(String),

    #[error("Round {0} not found")]
    RoundNotFound(RoundIndex),

    #[error("Match {match_id} not found in round {round_index}")]
    MatchNotFound {
        round_index: RoundIndex,
        match_id: MatchId,
    },

    #[error("Group match {0} not found")]
    GroupMatchNotFound(MatchId),

    #[error("Triad {0} not found")]
    TriadNotFound(u32),

    #[error("Operation requires {expected} mode, tournament is {found}")]
    WrongMode {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Score would overflow the standings of participant {participant_id}")]
    ScoreOutOfRange { participant_id: ParticipantId },

    #[error("Stage is closed: {0}")]
    StageClosed(&'static str),

    #[error(transparent)]
    Tournament(#[from] TournamentError),
}
