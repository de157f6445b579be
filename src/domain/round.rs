use serde::{Deserialize, Serialize};

use crate::domain::{MatchId, ParticipantId, RoundIndex};

/// Название финального раунда (ровно два участника).
pub const FINAL_ROUND_NAME: &str = "Final - Oro";

/// Матч 1 на 1 внутри раунда.
///
/// Инварианты:
///   - bye: ровно одна сторона заполнена, победитель = эта сторона;
///   - обычный матч: победитель (если есть) = `a` или `b`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Match {
    pub id: MatchId,
    pub a: Option<ParticipantId>,
    pub b: Option<ParticipantId>,
    pub is_bye: bool,
    pub winner: Option<ParticipantId>,
}

impl Match {
    pub fn pair(id: MatchId, a: ParticipantId, b: ParticipantId) -> Self {
        Self {
            id,
            a: Some(a),
            b: Some(b),
            is_bye: false,
            winner: None,
        }
    }

    /// Bye сразу считается решённым: победитель проставлен.
    pub fn bye(id: MatchId, participant: ParticipantId) -> Self {
        Self {
            id,
            a: Some(participant),
            b: None,
            is_bye: true,
            winner: Some(participant),
        }
    }

    /// Единственный участник bye-матча (если форма матча корректна).
    pub fn bye_participant(&self) -> Option<ParticipantId> {
        match (self.a, self.b) {
            (Some(p), None) | (None, Some(p)) => Some(p),
            _ => None,
        }
    }

    pub fn involves(&self, participant: ParticipantId) -> bool {
        self.a == Some(participant) || self.b == Some(participant)
    }

    pub fn is_decided(&self) -> bool {
        self.is_bye || self.winner.is_some()
    }

    /// Победитель матча с учётом bye.
    pub fn effective_winner(&self) -> Option<ParticipantId> {
        if self.is_bye {
            self.bye_participant()
        } else {
            self.winner
        }
    }

    /// Проверка формы матча. Ошибка = ранее нарушенный инвариант.
    pub fn check_shape(&self) -> Result<(), String> {
        if self.is_bye {
            let sole = self.bye_participant().ok_or_else(|| {
                format!("bye match {} must have exactly one side", self.id)
            })?;
            if let Some(w) = self.winner {
                if w != sole {
                    return Err(format!(
                        "bye match {}: winner {} is not the bye participant {}",
                        self.id, w, sole
                    ));
                }
            }
            return Ok(());
        }

        match (self.a, self.b) {
            (Some(a), Some(b)) if a != b => {}
            _ => return Err(format!("match {} must have two distinct sides", self.id)),
        }
        if let Some(w) = self.winner {
            if !self.involves(w) {
                return Err(format!("match {}: winner {} is not a side", self.id, w));
            }
        }
        Ok(())
    }
}

/// Раунд плей-офф.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Round {
    /// 0-based, строго по порядку создания, без пропусков.
    pub index: RoundIndex,
    pub name: String,
    pub completed: bool,
    pub matches: Vec<Match>,
}

impl Round {
    pub fn new(index: RoundIndex, name: impl Into<String>, matches: Vec<Match>) -> Self {
        let mut round = Self {
            index,
            name: name.into(),
            completed: false,
            matches,
        };
        round.refresh_completed();
        round
    }

    /// Все матчи решены (или bye).
    pub fn all_decided(&self) -> bool {
        self.matches.iter().all(Match::is_decided)
    }

    pub fn refresh_completed(&mut self) {
        self.completed = self.all_decided();
    }

    pub fn match_by_id(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn match_by_id_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Все участники раунда в порядке матчей.
    pub fn participant_ids(&self) -> Vec<ParticipantId> {
        self.matches
            .iter()
            .flat_map(|m| [m.a, m.b])
            .flatten()
            .collect()
    }

    /// Победители раунда в порядке матчей (bye тоже считается победой).
    pub fn winners(&self) -> Vec<ParticipantId> {
        self.matches
            .iter()
            .filter_map(Match::effective_winner)
            .collect()
    }
}

/// Лестница названий раундов.
///
/// Считается один раз от исходного числа участников и индексируется
/// позицией этапа:
///   17–32 → "Dieciseisavos", 9–16 → "Octavos", 5–8 → "Cuartos",
///   3–4 → "Semifinales", иначе "Ronda N".
pub fn round_name_ladder(total_participants: usize) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut remaining = total_participants;

    while remaining > 2 {
        let name = match remaining {
            17..=32 => "Dieciseisavos".to_string(),
            9..=16 => "Octavos".to_string(),
            5..=8 => "Cuartos".to_string(),
            3..=4 => "Semifinales".to_string(),
            _ => format!("Ronda {}", names.len() + 1),
        };
        names.push(name);
        remaining = (remaining + 1) / 2;
    }

    names
}

/// Название раунда с позицией `round_index` для сетки из `total_participants`.
pub fn round_name(total_participants: usize, round_index: RoundIndex) -> String {
    round_name_ladder(total_participants)
        .into_iter()
        .nth(round_index as usize)
        .unwrap_or_else(|| format!("Ronda {}", round_index + 1))
}
