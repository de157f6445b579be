//! Доменная модель турнира: участники, раунды, матчи, группы, триады.

pub mod category;
pub mod group;
pub mod participant;
pub mod round;
pub mod tournament;
pub mod triad;

// Базовые идентификаторы.
pub type ParticipantId = u64;
pub type TournamentId = u64;
pub type MatchId = u64;
pub type RoundIndex = u32;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Round и т.п.
pub use category::*;
pub use group::*;
pub use participant::*;
pub use round::*;
pub use tournament::*;
pub use triad::*;
