// src/tournament/lobby.rs

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::domain::tournament::{Tournament, TournamentConfig, TournamentError};
use crate::domain::{
    Category, GroupMatch, MatchId, ParticipantId, RoundIndex, TournamentId, Triad,
};
use crate::engine::{self, BracketError};
use crate::infra::ids::IdGenerator;
use crate::infra::persistence::{InMemoryTournamentStorage, TournamentStorage};
use crate::infra::rng::{SystemRng, TournamentRng};
use crate::infra::rng_seed::RngSeed;
use crate::tournament::runtime::{StageOutcome, TournamentRuntime};

/// Турнирное лобби:
/// - хранит турниры через `TournamentStorage`;
/// - выдаёт новые TournamentId;
/// - следит, чтобы на категорию был ровно один активный турнир;
/// - каждую мутацию выполняет как одну транзакцию: копия → изменения → сохранение.
pub struct TournamentLobby<S: TournamentStorage = InMemoryTournamentStorage> {
    storage: S,
    ids: IdGenerator,
    active: BTreeMap<Category, TournamentId>,
    /// None → системный RNG, Some → воспроизводимые сетки.
    seed: Option<RngSeed>,
}

impl TournamentLobby<InMemoryTournamentStorage> {
    /// Пустое лобби в памяти, системный RNG.
    pub fn new() -> Self {
        Self::with_storage(InMemoryTournamentStorage::new(), None)
    }

    /// Пустое лобби в памяти с детерминированным RNG.
    pub fn with_seed(seed: RngSeed) -> Self {
        Self::with_storage(InMemoryTournamentStorage::new(), Some(seed))
    }
}

impl Default for TournamentLobby<InMemoryTournamentStorage> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TournamentStorage> TournamentLobby<S> {
    /// Лобби поверх уже существующего хранилища.
    ///
    /// Активные турниры и счётчик id восстанавливаются из хранилища.
    pub fn with_storage(storage: S, seed: Option<RngSeed>) -> Self {
        let mut active = BTreeMap::new();
        let mut max_id = 0;

        for id in storage.tournament_ids() {
            max_id = max_id.max(id);
            if let Some(t) = storage.load_tournament(id) {
                if t.is_active() {
                    // При нескольких активных побеждает самый свежий.
                    active.insert(t.config.category, t.id);
                }
            }
        }

        Self {
            storage,
            ids: IdGenerator::starting_at(max_id + 1),
            active,
            seed,
        }
    }

    /// Создать новый турнир. Предыдущий активный турнир категории уходит в Retired.
    pub fn create_tournament(
        &mut self,
        config: TournamentConfig,
    ) -> Result<TournamentId, TournamentError> {
        config.validate_full()?;
        let id = self.ids.next_tournament_id();
        let tournament = Tournament::new(id, config)?;

        self.retire_active(tournament.config.category);

        info!(
            tournament_id = id,
            category = ?tournament.config.category,
            mode = tournament.mode().label(),
            "tournament created"
        );

        self.storage.save_tournament(&tournament);
        self.active.insert(tournament.config.category, id);
        Ok(id)
    }

    /// Сбросить активный турнир категории: старый → Retired,
    /// новый – с тем же конфигом и теми же участниками, без сетки.
    pub fn reset_tournament(&mut self, category: Category) -> Result<TournamentId, TournamentError> {
        let old = self
            .active_for(category)
            .ok_or(TournamentError::NoActiveTournament { category })?;

        let id = self.ids.next_tournament_id();
        let mut fresh = Tournament::new(id, old.config.clone())?;
        for p in old.participants.iter() {
            fresh.participants.register(&p.name)?;
        }

        self.retire_active(category);

        info!(
            tournament_id = id,
            previous = old.id,
            participants = fresh.participants.len(),
            "tournament reset"
        );

        self.storage.save_tournament(&fresh);
        self.active.insert(category, id);
        Ok(id)
    }

    fn retire_active(&mut self, category: Category) {
        let Some(prev_id) = self.active.remove(&category) else {
            return;
        };
        if let Some(mut prev) = self.storage.load_tournament(prev_id) {
            prev.retire();
            self.storage.save_tournament(&prev);
            info!(tournament_id = prev_id, ?category, "tournament retired");
        }
    }

    /// Получить турнир по id (снимок).
    pub fn get(&self, id: TournamentId) -> Option<Tournament> {
        self.storage.load_tournament(id)
    }

    /// Активный турнир категории (снимок).
    pub fn active_for(&self, category: Category) -> Option<Tournament> {
        self.active
            .get(&category)
            .and_then(|id| self.storage.load_tournament(*id))
    }

    pub fn active_id(&self, category: Category) -> Option<TournamentId> {
        self.active.get(&category).copied()
    }

    /// Все турниры (и активные, и Retired) по возрастанию id.
    pub fn all(&self) -> Vec<Tournament> {
        self.storage
            .tournament_ids()
            .into_iter()
            .filter_map(|id| self.storage.load_tournament(id))
            .collect()
    }

    /// RNG для очередной операции над турниром.
    fn rng_for(&self, tournament: &Tournament) -> TournamentRng {
        match &self.seed {
            Some(seed) => TournamentRng::Seeded(
                seed.derive(tournament.id, tournament.operations_applied)
                    .to_rng(),
            ),
            None => TournamentRng::System(SystemRng),
        }
    }

    /// Одна атомарная операция над турниром.
    ///
    /// Работаем над копией; в хранилище она попадает только при `Ok`.
    pub fn transact<T, F>(&mut self, id: TournamentId, op: F) -> Result<T, BracketError>
    where
        F: FnOnce(&mut Tournament, &mut TournamentRng) -> Result<T, BracketError>,
    {
        let mut draft = self
            .storage
            .load_tournament(id)
            .ok_or(TournamentError::TournamentNotFound { tournament_id: id })?;
        draft.ensure_active()?;

        let mut rng = self.rng_for(&draft);
        let out = op(&mut draft, &mut rng)?;

        draft.operations_applied += 1;
        self.storage.save_tournament(&draft);
        debug!(tournament_id = id, op = draft.operations_applied, "committed");
        Ok(out)
    }

    /// Зарегистрировать участника. После построения первого этапа – закрыто.
    pub fn register_participant(
        &mut self,
        tournament_id: TournamentId,
        name: &str,
    ) -> Result<ParticipantId, BracketError> {
        self.transact(tournament_id, |t, _| {
            if t.has_started() {
                return Err(BracketError::StageClosed("registration is closed"));
            }
            Ok(t.register_participant(name)?)
        })
    }

    /// Построить первый этап (раунд, группы или триады).
    pub fn start(&mut self, tournament_id: TournamentId) -> Result<StageOutcome, BracketError> {
        self.transact(tournament_id, |t, rng| TournamentRuntime::start(t, rng))
    }

    /// Продвинуть турнир на один шаг.
    pub fn advance(&mut self, tournament_id: TournamentId) -> Result<StageOutcome, BracketError> {
        self.transact(tournament_id, |t, rng| TournamentRuntime::advance(t, rng))
    }

    pub fn record_group_result(
        &mut self,
        tournament_id: TournamentId,
        match_id: MatchId,
        goals_home: u32,
        goals_away: u32,
    ) -> Result<GroupMatch, BracketError> {
        self.transact(tournament_id, |t, _| {
            engine::record_group_result(t, match_id, goals_home, goals_away).cloned()
        })
    }

    pub fn record_triad_winner(
        &mut self,
        tournament_id: TournamentId,
        triad_index: u32,
        winner: ParticipantId,
    ) -> Result<Triad, BracketError> {
        self.transact(tournament_id, |t, _| {
            engine::record_triad_winner(t, triad_index, winner).cloned()
        })
    }

    /// Проставить/исправить победителя матча и перегенерировать хвост сетки.
    pub fn set_match_winner(
        &mut self,
        tournament_id: TournamentId,
        round_index: RoundIndex,
        match_id: MatchId,
        winner: ParticipantId,
    ) -> Result<Vec<RoundIndex>, BracketError> {
        self.transact(tournament_id, |t, rng| {
            engine::set_match_winner(t, round_index, match_id, winner, rng)
        })
    }

    /// Посев плей-офф из внешнего упорядоченного списка (например, рейтинг по времени).
    pub fn seed_knockout(
        &mut self,
        tournament_id: TournamentId,
        seeds: &[ParticipantId],
    ) -> Result<StageOutcome, BracketError> {
        self.transact(tournament_id, |t, rng| {
            Ok(match engine::build_knockout_from_seeds(t, seeds, rng)? {
                Some(round) => StageOutcome::RoundCreated {
                    index: round.index,
                    name: round.name.clone(),
                },
                None => StageOutcome::Nothing,
            })
        })
    }
}
