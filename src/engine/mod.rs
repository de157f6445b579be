//! Движок турнирной сетки: посев, плей-офф, группы, триады, перегенерация.
//!
//! Основные операции:
//!   - `build_initial_round` – первый раунд плей-офф из списка участников
//!   - `generate_next_round` – следующий раунд из победителей завершённого
//!   - `create_groups` / `record_group_result` – групповой этап
//!   - `create_triads` / `record_triad_winner` – триады
//!   - `set_match_winner` – исправление результата с перегенерацией хвоста
//!
//! Все функции работают над `&mut Tournament` и не делают I/O.

pub mod advancement;
pub mod errors;
pub mod group_stage;
pub mod knockout;
pub mod regeneration;
pub mod seeding;
pub mod triads;

pub use advancement::generate_next_round;
pub use errors::BracketError;
pub use group_stage::{
    all_group_matches_played, create_groups, group_standings, groups_in_code_order,
    qualified_from_groups, record_group_result, seed_knockout_from_groups,
};
pub use knockout::{build_initial_round, build_knockout_from_seeds};
pub use regeneration::{regenerate_following_from, set_match_winner, truncate_rounds_after};
pub use seeding::shuffle_participants;
pub use triads::{create_triads, record_triad_winner, seed_knockout_from_triads, triads_completed};

/// RNG интерфейс для engine.
/// Реализации – в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
