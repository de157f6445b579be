use serde::{Deserialize, Serialize};

use crate::domain::tournament::TournamentConfig;
use crate::domain::{Category, MatchId, ParticipantId, RoundIndex, TournamentId};
use crate::infra::persistence::TournamentStorage;
use crate::tournament::{StageOutcome, TournamentLobby};

use super::errors::ApiError;

/// Команда верхнего уровня: всё, что меняет состояние.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Создать турнир; прежний активный турнир категории уходит в Retired.
    CreateTournament { config: TournamentConfig },

    /// Сбросить активный турнир категории (те же участники, пустая сетка).
    ResetTournament { category: Category },

    /// Зарегистрировать участника.
    RegisterParticipant {
        tournament_id: TournamentId,
        name: String,
    },

    /// Построить первый этап: раунд 0, группы или триады.
    StartTournament { tournament_id: TournamentId },

    /// Продвинуть турнир на один шаг (следующий раунд или посев плей-офф).
    AdvanceRound { tournament_id: TournamentId },

    /// Посеять плей-офф из внешнего упорядоченного списка.
    SeedKnockout {
        tournament_id: TournamentId,
        seeds: Vec<ParticipantId>,
    },

    /// Счёт матча группового этапа (повторная запись = исправление).
    RecordGroupResult {
        tournament_id: TournamentId,
        match_id: MatchId,
        goals_home: u32,
        goals_away: u32,
    },

    /// Победитель триады.
    RecordTriadWinner {
        tournament_id: TournamentId,
        triad_index: u32,
        winner: ParticipantId,
    },

    /// Проставить/исправить победителя матча плей-офф с перегенерацией хвоста.
    SetMatchWinner {
        tournament_id: TournamentId,
        round_index: RoundIndex,
        match_id: MatchId,
        winner: ParticipantId,
    },
}

/// Результат успешной команды.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandOutcome {
    TournamentCreated { tournament_id: TournamentId },
    ParticipantRegistered { participant_id: ParticipantId },
    Stage(StageOutcome),
    GroupResultRecorded { match_id: MatchId },
    TriadJudged { triad_index: u32, winner: ParticipantId },
    /// Индексы раундов, построенных заново после правки.
    RoundsRegenerated { created: Vec<RoundIndex> },
}

/// Выполнить команду над лобби.
pub fn execute_command<S: TournamentStorage>(
    lobby: &mut TournamentLobby<S>,
    command: Command,
) -> Result<CommandOutcome, ApiError> {
    let outcome = match command {
        Command::CreateTournament { config } => CommandOutcome::TournamentCreated {
            tournament_id: lobby.create_tournament(config)?,
        },
        Command::ResetTournament { category } => CommandOutcome::TournamentCreated {
            tournament_id: lobby.reset_tournament(category)?,
        },
        Command::RegisterParticipant {
            tournament_id,
            name,
        } => CommandOutcome::ParticipantRegistered {
            participant_id: lobby.register_participant(tournament_id, &name)?,
        },
        Command::StartTournament { tournament_id } => {
            CommandOutcome::Stage(lobby.start(tournament_id)?)
        }
        Command::AdvanceRound { tournament_id } => {
            CommandOutcome::Stage(lobby.advance(tournament_id)?)
        }
        Command::SeedKnockout {
            tournament_id,
            seeds,
        } => CommandOutcome::Stage(lobby.seed_knockout(tournament_id, &seeds)?),
        Command::RecordGroupResult {
            tournament_id,
            match_id,
            goals_home,
            goals_away,
        } => {
            let m = lobby.record_group_result(tournament_id, match_id, goals_home, goals_away)?;
            CommandOutcome::GroupResultRecorded { match_id: m.id }
        }
        Command::RecordTriadWinner {
            tournament_id,
            triad_index,
            winner,
        } => {
            lobby.record_triad_winner(tournament_id, triad_index, winner)?;
            CommandOutcome::TriadJudged {
                triad_index,
                winner,
            }
        }
        Command::SetMatchWinner {
            tournament_id,
            round_index,
            match_id,
            winner,
        } => CommandOutcome::RoundsRegenerated {
            created: lobby.set_match_winner(tournament_id, round_index, match_id, winner)?,
        },
    };

    Ok(outcome)
}
