// tests/lobby_tests.rs
//
// Лобби: жизненный цикл турниров по категориям и атомарность операций.
//
// Проверяем:
//  1) Один активный турнир на категорию; создание нового → прежний Retired.
//  2) Сброс: те же участники, пустая сетка, новый id.
//  3) Retired-турнир не принимает изменений.
//  4) Неудачная операция не меняет сохранённое состояние.
//  5) Полные сценарии: футбол (группы → плей-офф) и rally (триады → плей-офф).
//  6) Одинаковый seed лобби → одинаковые сетки.

use bracket_engine::domain::{
    Category, Tournament, TournamentConfig, TournamentError, TournamentMode, TournamentStatus,
    FINAL_ROUND_NAME,
};
use bracket_engine::engine::BracketError;
use bracket_engine::infra::persistence::{InMemoryTournamentStorage, TournamentStorage};
use bracket_engine::infra::rng_seed::RngSeed;
use bracket_engine::tournament::{StageOutcome, TournamentLobby};

fn seeded_lobby() -> TournamentLobby {
    TournamentLobby::with_seed(RngSeed::from_u64(2024))
}

fn create_with(lobby: &mut TournamentLobby, category: Category, names: &[&str]) -> u64 {
    let id = lobby
        .create_tournament(TournamentConfig::for_category("Torneo", category))
        .unwrap();
    for name in names {
        lobby.register_participant(id, name).unwrap();
    }
    id
}

fn numbered(prefix: &str, n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("{} {}", prefix, i)).collect()
}

/// Проставить в последнем раунде победителем сторону `a` везде, где не решено.
fn decide_latest_round(lobby: &mut TournamentLobby, id: u64) -> Vec<u32> {
    let t = lobby.get(id).unwrap();
    let round = t.latest_round().unwrap().clone();

    let mut created = Vec::new();
    for m in round.matches.iter().filter(|m| !m.is_decided()) {
        created = lobby
            .set_match_winner(id, round.index, m.id, m.a.unwrap())
            .unwrap();
    }
    created
}

//
// TEST 1 — один активный турнир на категорию
//
#[test]
fn creating_tournament_retires_previous_of_same_category() {
    let mut lobby = seeded_lobby();

    let first = create_with(&mut lobby, Category::SumoRc, &["Rayo", "Trueno"]);
    let second = create_with(&mut lobby, Category::SumoRc, &["Titan"]);

    assert_ne!(first, second);
    assert_eq!(lobby.active_id(Category::SumoRc), Some(second));
    assert_eq!(lobby.get(first).unwrap().status, TournamentStatus::Retired);
    assert_eq!(lobby.get(second).unwrap().status, TournamentStatus::Active);
    assert_eq!(lobby.all().len(), 2);
}

#[test]
fn categories_are_independent() {
    let mut lobby = seeded_lobby();

    let sumo = create_with(&mut lobby, Category::SumoAutonomo, &[]);
    let boats = create_with(&mut lobby, Category::Barcos, &[]);

    assert_eq!(lobby.active_id(Category::SumoAutonomo), Some(sumo));
    assert_eq!(lobby.active_id(Category::Barcos), Some(boats));
    assert!(lobby.get(sumo).unwrap().is_active());
    assert!(lobby.active_for(Category::Velocista).is_none());
}

#[test]
fn invalid_config_does_not_consume_an_id() {
    let mut lobby = seeded_lobby();

    let bad = TournamentConfig {
        name: "Copa".into(),
        category: Category::Futbol,
        mode: TournamentMode::GroupStage { max_group_size: 1 },
    };
    let err = lobby.create_tournament(bad).unwrap_err();
    assert!(matches!(err, TournamentError::InvalidConfig(_)));
    assert!(lobby.active_id(Category::Futbol).is_none());

    let id = create_with(&mut lobby, Category::Futbol, &[]);
    assert_eq!(id, 1);
}

//
// TEST 2 — сброс турнира
//
#[test]
fn reset_keeps_participants_and_clears_bracket() {
    let mut lobby = seeded_lobby();
    let old = create_with(&mut lobby, Category::Velocista, &["Flecha", "Bala", "Cometa"]);
    lobby.start(old).unwrap();

    let fresh = lobby.reset_tournament(Category::Velocista).unwrap();
    assert_ne!(fresh, old);
    assert_eq!(lobby.get(old).unwrap().status, TournamentStatus::Retired);

    let t = lobby.get(fresh).unwrap();
    assert!(t.is_active());
    assert!(t.rounds.is_empty());
    let names: Vec<&str> = t.participants.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Flecha", "Bala", "Cometa"]);
    assert_eq!(t.config, lobby.get(old).unwrap().config);
}

#[test]
fn reset_without_active_tournament_fails() {
    let mut lobby = seeded_lobby();
    let err = lobby.reset_tournament(Category::Rally).unwrap_err();
    assert_eq!(
        err,
        TournamentError::NoActiveTournament {
            category: Category::Rally
        }
    );
}

//
// TEST 3 — Retired и неизвестные турниры
//
#[test]
fn retired_tournament_rejects_mutations() {
    let mut lobby = seeded_lobby();
    let old = create_with(&mut lobby, Category::Barcos, &["Ancla", "Vela"]);
    create_with(&mut lobby, Category::Barcos, &[]);

    let err = lobby.register_participant(old, "Remo").unwrap_err();
    assert_eq!(
        err,
        BracketError::Tournament(TournamentError::TournamentRetired { tournament_id: old })
    );

    let err = lobby.start(old).unwrap_err();
    assert!(matches!(
        err,
        BracketError::Tournament(TournamentError::TournamentRetired { .. })
    ));
    assert!(lobby.get(old).unwrap().rounds.is_empty());
}

#[test]
fn unknown_tournament_is_reported() {
    let mut lobby = seeded_lobby();
    let err = lobby.advance(404).unwrap_err();
    assert_eq!(
        err,
        BracketError::Tournament(TournamentError::TournamentNotFound { tournament_id: 404 })
    );
}

//
// TEST 4 — атомарность
//
#[test]
fn duplicate_name_is_rejected_case_insensitively() {
    let mut lobby = seeded_lobby();
    let id = create_with(&mut lobby, Category::SumoRc, &["Rayo"]);
    let ops_before = lobby.get(id).unwrap().operations_applied;

    let err = lobby.register_participant(id, "  rayo ").unwrap_err();
    assert!(matches!(
        err,
        BracketError::Tournament(TournamentError::DuplicateParticipant { .. })
    ));

    let t = lobby.get(id).unwrap();
    assert_eq!(t.participants.len(), 1);
    assert_eq!(t.operations_applied, ops_before);
}

#[test]
fn registration_closes_once_started() {
    let mut lobby = seeded_lobby();
    let id = create_with(&mut lobby, Category::SumoRc, &["Rayo", "Trueno"]);
    lobby.start(id).unwrap();

    let err = lobby.register_participant(id, "Tardio").unwrap_err();
    assert_eq!(err, BracketError::StageClosed("registration is closed"));
}

#[test]
fn failed_correction_leaves_stored_state_untouched() {
    let mut lobby = seeded_lobby();
    let names = numbered("Robot", 4);
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let id = create_with(&mut lobby, Category::SumoRc, &refs);
    lobby.start(id).unwrap();

    let before: Tournament = lobby.get(id).unwrap();
    let m = before.rounds[0].matches[0].clone();
    let outsider = before
        .participants
        .ids()
        .into_iter()
        .find(|p| !m.involves(*p))
        .unwrap();

    let err = lobby.set_match_winner(id, 0, m.id, outsider).unwrap_err();
    assert!(matches!(err, BracketError::InvalidParticipant { .. }));
    assert_eq!(lobby.get(id).unwrap(), before);
}

//
// TEST 5 — полные сценарии через лобби
//
#[test]
fn knockout_without_participants_starts_with_nothing() {
    let mut lobby = seeded_lobby();
    let id = create_with(&mut lobby, Category::SumoAutonomo, &[]);
    assert_eq!(lobby.start(id).unwrap(), StageOutcome::Nothing);
    assert!(lobby.get(id).unwrap().rounds.is_empty());
}

#[test]
fn futbol_groups_then_knockout() {
    let mut lobby = seeded_lobby();
    let names = numbered("Equipo", 8);
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let id = create_with(&mut lobby, Category::Futbol, &refs);

    assert_eq!(
        lobby.start(id).unwrap(),
        StageOutcome::GroupsCreated { groups: 2 }
    );

    // Плей-офф до конца групп – рано.
    let err = lobby.advance(id).unwrap_err();
    assert_eq!(err, BracketError::PrematureAdvancement("group stage"));

    let match_ids: Vec<u64> = lobby
        .get(id)
        .unwrap()
        .groups
        .iter()
        .flat_map(|g| g.matches.iter().map(|m| m.id))
        .collect();
    for (n, match_id) in match_ids.into_iter().enumerate() {
        let stored = lobby
            .record_group_result(id, match_id, (n % 3) as u32, 1)
            .unwrap();
        assert!(stored.played);
    }

    assert_eq!(
        lobby.advance(id).unwrap(),
        StageOutcome::RoundCreated {
            index: 0,
            name: "Semifinales".into()
        }
    );

    assert_eq!(decide_latest_round(&mut lobby, id), vec![1]);
    let t = lobby.get(id).unwrap();
    assert_eq!(t.rounds[1].name, FINAL_ROUND_NAME);

    decide_latest_round(&mut lobby, id);
    let champion = lobby.get(id).unwrap().champion();
    assert!(champion.is_some());
    assert_eq!(
        lobby.advance(id).unwrap(),
        StageOutcome::Decided { champion }
    );
}

#[test]
fn rally_triads_then_knockout() {
    let mut lobby = seeded_lobby();
    let names = numbered("Auto", 9);
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let id = create_with(&mut lobby, Category::Rally, &refs);

    assert_eq!(
        lobby.start(id).unwrap(),
        StageOutcome::TriadsCreated { triads: 3 }
    );

    let picks: Vec<(u32, u64)> = lobby
        .get(id)
        .unwrap()
        .triads
        .iter()
        .map(|tr| (tr.index, tr.present_members()[0]))
        .collect();
    for (idx, winner) in picks {
        let triad = lobby.record_triad_winner(id, idx, winner).unwrap();
        assert_eq!(triad.winner, Some(winner));
    }

    assert_eq!(
        lobby.advance(id).unwrap(),
        StageOutcome::RoundCreated {
            index: 0,
            name: "Semifinales".into()
        }
    );

    let t = lobby.get(id).unwrap();
    assert_eq!(t.rounds[0].matches.len(), 2);
    assert_eq!(t.rounds[0].matches.iter().filter(|m| m.is_bye).count(), 1);
}

#[test]
fn external_seed_list_builds_first_round() {
    let mut lobby = seeded_lobby();
    let id = create_with(&mut lobby, Category::Velocista, &["A", "B", "C", "D", "E"]);
    let ids = lobby.get(id).unwrap().participants.ids();

    let outcome = lobby.seed_knockout(id, &ids[..4]).unwrap();
    assert_eq!(
        outcome,
        StageOutcome::RoundCreated {
            index: 0,
            name: "Semifinales".into()
        }
    );

    let err = lobby.seed_knockout(id, &ids).unwrap_err();
    assert!(matches!(err, BracketError::StageClosed(_)));
}

//
// TEST 6 — воспроизводимость и восстановление
//
#[test]
fn same_lobby_seed_gives_same_brackets() {
    let run = || {
        let mut lobby = seeded_lobby();
        let names = numbered("Robot", 11);
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let id = create_with(&mut lobby, Category::SumoRc, &refs);
        lobby.start(id).unwrap();
        decide_latest_round(&mut lobby, id);
        lobby.get(id).unwrap()
    };

    assert_eq!(run().rounds, run().rounds);
}

#[test]
fn lobby_restores_active_map_and_ids_from_storage() {
    let mut storage = InMemoryTournamentStorage::new();

    let mut retired = Tournament::new(2, TournamentConfig::for_category("Viejo", Category::Barcos))
        .unwrap();
    retired.retire();
    storage.save_tournament(&retired);

    let active = Tournament::new(4, TournamentConfig::for_category("Nuevo", Category::Barcos))
        .unwrap();
    storage.save_tournament(&active);

    let mut lobby = TournamentLobby::with_storage(storage, None);
    assert_eq!(lobby.active_id(Category::Barcos), Some(4));

    let next = lobby
        .create_tournament(TournamentConfig::for_category("Otro", Category::Barcos))
        .unwrap();
    assert_eq!(next, 5);
    assert_eq!(lobby.get(4).unwrap().status, TournamentStatus::Retired);
}
