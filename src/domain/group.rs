use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::{MatchId, ParticipantId};

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

/// Сколько лучших команд каждой группы выходит в плей-офф.
pub const QUALIFIERS_PER_GROUP: usize = 2;

/// Строка турнирной таблицы группы: одна на (группа, участник).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamStanding {
    pub participant_id: ParticipantId,
    /// Копия имени – нужна для последнего тай-брейка.
    pub name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl TeamStanding {
    pub fn new(participant_id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            participant_id,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Строка после ещё одного сыгранного матча (scored – забили мы, conceded – нам).
    ///
    /// `None`, если какой-то счётчик выходит за пределы `u32`; сама строка не меняется.
    pub fn with_result(&self, scored: u32, conceded: u32) -> Option<Self> {
        let mut next = self.clone();
        next.played = self.played.checked_add(1)?;
        next.goals_for = self.goals_for.checked_add(scored)?;
        next.goals_against = self.goals_against.checked_add(conceded)?;
        next.goal_difference = next.goals_for as i64 - next.goals_against as i64;

        match scored.cmp(&conceded) {
            Ordering::Greater => {
                next.wins = self.wins.checked_add(1)?;
                next.points = self.points.checked_add(POINTS_FOR_WIN)?;
            }
            Ordering::Less => next.losses = self.losses.checked_add(1)?,
            Ordering::Equal => {
                next.draws = self.draws.checked_add(1)?;
                next.points = self.points.checked_add(POINTS_FOR_DRAW)?;
            }
        }
        Some(next)
    }

    /// Откатить ранее учтённый матч (для исправления результата).
    pub fn revert(&mut self, scored: u32, conceded: u32) {
        self.played = self.played.saturating_sub(1);
        self.goals_for = self.goals_for.saturating_sub(scored);
        self.goals_against = self.goals_against.saturating_sub(conceded);
        self.goal_difference = self.goals_for as i64 - self.goals_against as i64;

        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.wins = self.wins.saturating_sub(1);
                self.points = self.points.saturating_sub(POINTS_FOR_WIN);
            }
            Ordering::Less => self.losses = self.losses.saturating_sub(1),
            Ordering::Equal => {
                self.draws = self.draws.saturating_sub(1);
                self.points = self.points.saturating_sub(POINTS_FOR_DRAW);
            }
        }
    }
}

/// Порядок в таблице: очки ↓, разница ↓, забитые ↓, имя ↑.
pub fn compare_standings(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.name.cmp(&b.name))
}

/// Матч группового этапа.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupMatch {
    pub id: MatchId,
    pub home: ParticipantId,
    pub away: ParticipantId,
    /// (голы хозяев, голы гостей)
    pub score: Option<(u32, u32)>,
    pub played: bool,
}

/// Группа круговой системы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    /// Код группы: "A".."Z", дальше "AA", "AB", ...
    pub code: String,
    pub standings: Vec<TeamStanding>,
    pub matches: Vec<GroupMatch>,
}

impl Group {
    pub fn is_complete(&self) -> bool {
        self.matches.iter().all(|m| m.played)
    }

    pub fn standing(&self, participant: ParticipantId) -> Option<&TeamStanding> {
        self.standings
            .iter()
            .find(|s| s.participant_id == participant)
    }

    pub fn standing_mut(&mut self, participant: ParticipantId) -> Option<&mut TeamStanding> {
        self.standings
            .iter_mut()
            .find(|s| s.participant_id == participant)
    }

    /// Таблица группы в порядке ранжирования.
    pub fn ranked(&self) -> Vec<&TeamStanding> {
        let mut rows: Vec<&TeamStanding> = self.standings.iter().collect();
        rows.sort_by(|a, b| compare_standings(a, b));
        rows
    }

    /// Топ-N группы по таблице.
    pub fn top(&self, n: usize) -> Vec<ParticipantId> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|s| s.participant_id)
            .collect()
    }
}

/// Код группы по её порядковому номеру: 0 → "A", 25 → "Z", 26 → "AA".
pub fn group_code(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.into_iter().rev().collect()
}

/// Порядок кодов групп: короче раньше, при равной длине – по алфавиту ("Z" < "AA").
pub fn compare_group_codes(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
