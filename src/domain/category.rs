use serde::{Deserialize, Serialize};

/// Максимальный размер группы по умолчанию (футбол).
pub const DEFAULT_MAX_GROUP_SIZE: usize = 5;

/// Категория соревнования. На каждую категорию – максимум один активный турнир.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Rally,
    Futbol,
    SumoRc,
    SumoAutonomo,
    Barcos,
    Velocista,
}

impl Category {
    /// Формат соревнования, который используется для категории по умолчанию.
    pub fn default_mode(self) -> TournamentMode {
        match self {
            Category::Rally => TournamentMode::Triads,
            Category::Futbol => TournamentMode::GroupStage {
                max_group_size: DEFAULT_MAX_GROUP_SIZE,
            },
            Category::SumoRc
            | Category::SumoAutonomo
            | Category::Barcos
            | Category::Velocista => TournamentMode::Knockout,
        }
    }

    /// Название категории для экрана сетки.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Rally => "Rally",
            Category::Futbol => "Fútbol",
            Category::SumoRc => "Sumo RC",
            Category::SumoAutonomo => "Sumo Autónomo",
            Category::Barcos => "Barcos",
            Category::Velocista => "Velocista",
        }
    }
}

/// Формат турнира. Закрытый набор вариантов: на каждый – свой движок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TournamentMode {
    /// Олимпийская система с первого раунда.
    Knockout,
    /// Групповой этап (круговая система), затем плей-офф из топ-2 каждой группы.
    GroupStage { max_group_size: usize },
    /// Триады (группы по трое, один победитель), затем плей-офф.
    Triads,
}

impl TournamentMode {
    pub fn label(&self) -> &'static str {
        match self {
            TournamentMode::Knockout => "knockout",
            TournamentMode::GroupStage { .. } => "group_stage",
            TournamentMode::Triads => "triads",
        }
    }
}
