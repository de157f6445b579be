//! Инфраструктурный слой вокруг движка сетки:
//! - генерация ID турниров;
//! - RNG-реализации и вывод seed на турнир;
//! - абстракция хранения (тесты / внешнее приложение);
//! - маппинги из domain в DTO API.

pub mod ids;
pub mod mapping;
pub mod persistence;
pub mod rng;
pub mod rng_seed;

pub use ids::*;
pub use mapping::*;
pub use persistence::*;
pub use rng::*;
pub use rng_seed::RngSeed;
