use serde::{Deserialize, Serialize};

use crate::domain::tournament::TournamentError;
use crate::domain::ParticipantId;

/// Участник турнира (робот / команда). После создания не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

/// Упорядоченный реестр участников одного турнира.
///
/// - порядок = порядок регистрации;
/// - имена уникальны без учёта регистра;
/// - участников никогда не удаляем.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantRegistry {
    entries: Vec<Participant>,
    next_id: ParticipantId,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Зарегистрировать участника. Имя обрезается по краям.
    pub fn register(&mut self, name: &str) -> Result<ParticipantId, TournamentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }

        let key = name.to_lowercase();
        if self.entries.iter().any(|p| p.name.to_lowercase() == key) {
            return Err(TournamentError::DuplicateParticipant {
                name: name.to_string(),
            });
        }

        // next_id = 0 бывает только у реестра из Default.
        let id = self.next_id.max(1);
        self.next_id = id + 1;

        self.entries.push(Participant {
            id,
            name: name.to_string(),
        });
        Ok(id)
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.entries.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.get(id).is_some()
    }

    /// Имя участника; для неизвестного id – пустая строка.
    pub fn name_of(&self, id: ParticipantId) -> &str {
        self.get(id).map(|p| p.name.as_str()).unwrap_or("")
    }

    /// Все id в порядке регистрации.
    pub fn ids(&self) -> Vec<ParticipantId> {
        self.entries.iter().map(|p| p.id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
