use std::collections::BTreeMap;

use crate::domain::{Tournament, TournamentId};

/// Абстракция хранилища турниров.
///
/// Технология хранения – забота внешнего приложения; здесь только шов.
/// Лобби загружает копию, меняет её и сохраняет целиком только при успехе.
pub trait TournamentStorage {
    /// Загрузить турнир.
    fn load_tournament(&self, id: TournamentId) -> Option<Tournament>;

    /// Сохранить турнир (полностью заменяет прежнюю версию).
    fn save_tournament(&mut self, tournament: &Tournament);

    /// Все id в порядке возрастания.
    fn tournament_ids(&self) -> Vec<TournamentId>;
}

/// Простая in-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryTournamentStorage {
    tournaments: BTreeMap<TournamentId, Tournament>,
}

impl InMemoryTournamentStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TournamentStorage for InMemoryTournamentStorage {
    fn load_tournament(&self, id: TournamentId) -> Option<Tournament> {
        self.tournaments.get(&id).cloned()
    }

    fn save_tournament(&mut self, tournament: &Tournament) {
        self.tournaments.insert(tournament.id, tournament.clone());
    }

    fn tournament_ids(&self) -> Vec<TournamentId> {
        self.tournaments.keys().copied().collect()
    }
}
