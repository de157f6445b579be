// tests/triad_tests.rs
//
// Триады (rally): группы по трое, один победитель, затем плей-офф.
//
// Проверяем:
//  1) 12 участников → 4 триады → "Semifinales" (2 матча) → "Final - Oro".
//  2) 7 участников → триады 3 + 3 + 1.
//  3) Победитель триады – только её участник.
//  4) Посев до оценки всех триад отклоняется.
//  5) 6 участников → сразу финал; 3 участника → чемпион без плей-офф.

use std::collections::HashSet;

use bracket_engine::domain::{Category, Tournament, TournamentConfig, FINAL_ROUND_NAME};
use bracket_engine::engine::{
    create_triads, generate_next_round, record_triad_winner, seed_knockout_from_triads,
    set_match_winner, triads_completed, BracketError,
};
use bracket_engine::infra::rng::DeterministicRng;
use bracket_engine::tournament::TournamentRuntime;

fn rally(n: usize) -> Tournament {
    let cfg = TournamentConfig::for_category("Rally", Category::Rally);
    let mut t = Tournament::new(11, cfg).unwrap();
    for i in 0..n {
        t.register_participant(&format!("Auto {}", i + 1)).unwrap();
    }
    t
}

/// Отметить победителем каждой триады её первого участника.
fn judge_all_first(t: &mut Tournament) {
    let picks: Vec<(u32, u64)> = t
        .triads
        .iter()
        .map(|tr| (tr.index, tr.present_members()[0]))
        .collect();
    for (idx, winner) in picks {
        record_triad_winner(t, idx, winner).unwrap();
    }
}

//
// TEST 1 — полный сценарий на 12 участников
//
#[test]
fn twelve_participants_reach_final() {
    let mut t = rally(12);
    let mut rng = DeterministicRng::from_seed(41);

    assert_eq!(create_triads(&mut t, &mut rng).unwrap(), 4);

    let mut seen = HashSet::new();
    for triad in &t.triads {
        assert_eq!(triad.present_members().len(), 3);
        for id in triad.present_members() {
            assert!(seen.insert(id));
        }
    }
    assert_eq!(seen.len(), 12);

    judge_all_first(&mut t);
    assert!(triads_completed(&t));

    let round = seed_knockout_from_triads(&mut t, &mut rng).unwrap().unwrap().clone();
    assert_eq!(round.name, "Semifinales");
    assert_eq!(round.matches.len(), 2);
    assert!(round.matches.iter().all(|m| !m.is_bye));

    for m in &round.matches {
        set_match_winner(&mut t, 0, m.id, m.a.unwrap(), &mut rng).unwrap();
    }

    let last = t.latest_round().unwrap();
    assert_eq!(last.index, 1);
    assert_eq!(last.name, FINAL_ROUND_NAME);
}

//
// TEST 2 — неполная последняя триада
//
#[test]
fn seven_participants_give_three_three_one() {
    let mut t = rally(7);
    let mut rng = DeterministicRng::from_seed(42);

    assert_eq!(create_triads(&mut t, &mut rng).unwrap(), 3);

    let sizes: Vec<usize> = t.triads.iter().map(|tr| tr.present_members().len()).collect();
    assert_eq!(sizes, vec![3, 3, 1]);

    let indices: Vec<u32> = t.triads.iter().map(|tr| tr.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);

    judge_all_first(&mut t);
    let round = seed_knockout_from_triads(&mut t, &mut rng).unwrap().unwrap();
    assert_eq!(round.name, "Semifinales");
    assert_eq!(round.matches.len(), 2);
    assert_eq!(round.matches.iter().filter(|m| m.is_bye).count(), 1);
}

//
// TEST 3 — чужой победитель и неизвестная триада
//
#[test]
fn triad_winner_must_be_member() {
    let mut t = rally(6);
    let mut rng = DeterministicRng::from_seed(43);
    create_triads(&mut t, &mut rng).unwrap();

    let outsider = t.triads[1].present_members()[0];
    let before = t.clone();

    let err = record_triad_winner(&mut t, 0, outsider).unwrap_err();
    assert_eq!(err, BracketError::InvalidParticipant { participant_id: outsider });
    assert_eq!(t, before);

    let err = record_triad_winner(&mut t, 9, outsider).unwrap_err();
    assert_eq!(err, BracketError::TriadNotFound(9));
}

#[test]
fn rejudging_a_triad_replaces_winner() {
    let mut t = rally(3);
    let mut rng = DeterministicRng::from_seed(44);
    create_triads(&mut t, &mut rng).unwrap();

    let members = t.triads[0].present_members();
    record_triad_winner(&mut t, 0, members[0]).unwrap();
    let triad = record_triad_winner(&mut t, 0, members[2]).unwrap();
    assert_eq!(triad.winner, Some(members[2]));
}

//
// TEST 4 — посев только после оценки всех триад
//
#[test]
fn seeding_waits_for_every_triad() {
    let mut t = rally(9);
    let mut rng = DeterministicRng::from_seed(45);

    assert!(!triads_completed(&t));
    create_triads(&mut t, &mut rng).unwrap();

    let first = t.triads[0].present_members()[0];
    record_triad_winner(&mut t, 0, first).unwrap();
    assert!(!triads_completed(&t));

    let err = seed_knockout_from_triads(&mut t, &mut rng).unwrap_err();
    assert_eq!(err, BracketError::PrematureAdvancement("triad set"));
    assert!(t.rounds.is_empty());
}

#[test]
fn triads_are_locked_after_seeding() {
    let mut t = rally(6);
    let mut rng = DeterministicRng::from_seed(46);
    create_triads(&mut t, &mut rng).unwrap();
    judge_all_first(&mut t);
    seed_knockout_from_triads(&mut t, &mut rng).unwrap();

    let other = t.triads[0].present_members()[1];
    let err = record_triad_winner(&mut t, 0, other).unwrap_err();
    assert!(matches!(err, BracketError::StageClosed(_)));

    let err = seed_knockout_from_triads(&mut t, &mut rng).unwrap_err();
    assert!(matches!(err, BracketError::StageClosed(_)));

    let err = create_triads(&mut t, &mut rng).unwrap_err();
    assert!(matches!(err, BracketError::StageClosed(_)));
}

//
// TEST 5 — маленькие турниры
//
#[test]
fn two_triads_go_straight_to_final() {
    let mut t = rally(6);
    let mut rng = DeterministicRng::from_seed(47);
    create_triads(&mut t, &mut rng).unwrap();
    judge_all_first(&mut t);

    let round = seed_knockout_from_triads(&mut t, &mut rng).unwrap().unwrap().clone();
    assert_eq!(round.name, FINAL_ROUND_NAME);
    assert_eq!(round.matches.len(), 1);

    let m = &round.matches[0];
    set_match_winner(&mut t, 0, m.id, m.b.unwrap(), &mut rng).unwrap();
    assert!(generate_next_round(&mut t, &mut rng).unwrap().is_none());
    assert_eq!(TournamentRuntime::champion(&t), m.b);
}

#[test]
fn single_triad_needs_no_bracket() {
    let mut t = rally(3);
    let mut rng = DeterministicRng::from_seed(48);
    create_triads(&mut t, &mut rng).unwrap();

    let winner = t.triads[0].present_members()[1];
    record_triad_winner(&mut t, 0, winner).unwrap();

    assert!(seed_knockout_from_triads(&mut t, &mut rng).unwrap().is_none());
    assert!(t.rounds.is_empty());
    assert_eq!(TournamentRuntime::champion(&t), Some(winner));
}

#[test]
fn triads_require_triad_mode() {
    let cfg = TournamentConfig::for_category("Velocista", Category::Velocista);
    let mut t = Tournament::new(12, cfg).unwrap();
    t.register_participant("Flecha").unwrap();

    let mut rng = DeterministicRng::from_seed(49);
    let err = create_triads(&mut t, &mut rng).unwrap_err();
    assert!(matches!(err, BracketError::WrongMode { .. }));
}
