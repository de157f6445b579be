// src/tournament/mod.rs

pub mod lobby;
pub mod runtime;

pub use lobby::TournamentLobby;
pub use runtime::{StageOutcome, TournamentRuntime};
