use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::TournamentId;

/// Простая генерация ID турниров на основе монотонного счётчика.
///
/// Id участников и матчей выдаёт сам `Tournament` – они локальны для турнира.
#[derive(Debug)]
pub struct IdGenerator {
    tournament_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Продолжить нумерацию после уже существующих турниров (например, из хранилища).
    pub fn starting_at(first: TournamentId) -> Self {
        Self {
            tournament_counter: AtomicU64::new(first.max(1)),
        }
    }

    #[inline]
    pub fn next_tournament_id(&self) -> TournamentId {
        self.tournament_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
