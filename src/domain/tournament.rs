// src/domain/tournament.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::category::{Category, TournamentMode};
use crate::domain::group::Group;
use crate::domain::participant::ParticipantRegistry;
use crate::domain::round::Round;
use crate::domain::triad::Triad;
use crate::domain::{MatchId, ParticipantId, TournamentId};

/// Конфигурация турнира.
/// Всё, что приходит при создании турнира из внешнего приложения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TournamentConfig {
    /// Название турнира.
    pub name: String,

    /// Категория соревнования (rally, fútbol, sumo, ...).
    pub category: Category,

    /// Формат: плей-офф, группы или триады.
    pub mode: TournamentMode,
}

impl TournamentConfig {
    /// Пресет: формат по умолчанию для категории.
    pub fn for_category(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            mode: category.default_mode(),
        }
    }

    /// Жёсткая валидация конфига турнира.
    pub fn validate_full(&self) -> Result<(), TournamentError> {
        if self.name.trim().is_empty() {
            return Err(TournamentError::InvalidConfig(
                "TournamentConfig: name is empty".into(),
            ));
        }

        if let TournamentMode::GroupStage { max_group_size } = self.mode {
            if max_group_size < 2 {
                return Err(TournamentError::InvalidConfig(format!(
                    "TournamentConfig: max_group_size must be >= 2, got {}",
                    max_group_size
                )));
            }
        }

        Ok(())
    }
}

/// Жизненный цикл турнира.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TournamentStatus {
    Active,
    Retired,
}

/// Основной объект турнира: владеет участниками, раундами, группами и триадами.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tournament {
    pub id: TournamentId,
    pub config: TournamentConfig,
    pub status: TournamentStatus,
    pub participants: ParticipantRegistry,

    /// Раунды плей-офф; `rounds[i].index == i`.
    pub rounds: Vec<Round>,

    /// Только для `TournamentMode::GroupStage`.
    pub groups: Vec<Group>,

    /// Только для `TournamentMode::Triads`.
    pub triads: Vec<Triad>,

    /// Счётчик id для матчей (и плей-офф, и групповых).
    next_match_id: MatchId,

    /// Сколько мутирующих операций уже применено к турниру.
    ///
    /// Нужен, чтобы из seed лобби выводить отдельный RNG на каждую операцию.
    pub operations_applied: u64,
}

impl Tournament {
    pub fn new(id: TournamentId, config: TournamentConfig) -> Result<Self, TournamentError> {
        config.validate_full()?;

        Ok(Self {
            id,
            config,
            status: TournamentStatus::Active,
            participants: ParticipantRegistry::new(),
            rounds: Vec::new(),
            groups: Vec::new(),
            triads: Vec::new(),
            next_match_id: 1,
            operations_applied: 0,
        })
    }

    pub fn mode(&self) -> TournamentMode {
        self.config.mode
    }

    pub fn is_active(&self) -> bool {
        self.status == TournamentStatus::Active
    }

    pub fn ensure_active(&self) -> Result<(), TournamentError> {
        if self.is_active() {
            Ok(())
        } else {
            Err(TournamentError::TournamentRetired {
                tournament_id: self.id,
            })
        }
    }

    pub fn retire(&mut self) {
        self.status = TournamentStatus::Retired;
    }

    /// Зарегистрировать участника (только в активном турнире).
    pub fn register_participant(&mut self, name: &str) -> Result<ParticipantId, TournamentError> {
        self.ensure_active()?;
        self.participants.register(name)
    }

    /// Выдать новый id матча.
    pub fn allocate_match_id(&mut self) -> MatchId {
        let id = self.next_match_id.max(1);
        self.next_match_id = id + 1;
        id
    }

    /// Построен ли уже первый этап (раунд, группы или триады).
    pub fn has_started(&self) -> bool {
        !self.rounds.is_empty() || !self.groups.is_empty() || !self.triads.is_empty()
    }

    pub fn latest_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn round(&self, index: u32) -> Option<&Round> {
        self.rounds.get(index as usize).filter(|r| r.index == index)
    }

    /// Победитель турнира, если сетка уже решена:
    /// последний раунд завершён и в нём ровно один победитель.
    pub fn champion(&self) -> Option<ParticipantId> {
        let last = self.latest_round()?;
        if !last.completed {
            return None;
        }
        match last.winners().as_slice() {
            [single] => Some(*single),
            _ => None,
        }
    }
}

/// Ошибки, которые могут возникать при работе с турниром.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TournamentError {
    #[error("Tournament not found: id={tournament_id}")]
    TournamentNotFound { tournament_id: TournamentId },

    #[error("No active tournament for category {category:?}")]
    NoActiveTournament { category: Category },

    #[error("Tournament {tournament_id} is retired")]
    TournamentRetired { tournament_id: TournamentId },

    #[error("Participant name {name:?} is already registered")]
    DuplicateParticipant { name: String },

    #[error("Participant name is empty")]
    EmptyName,

    #[error("Invalid tournament config: {0}")]
    InvalidConfig(String),
}
