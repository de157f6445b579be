//! Движок турнирной сетки для соревнований роботов.
//!
//! Три формата:
//!   - плей-офф (олимпийская система, bye при нечётном количестве);
//!   - групповой этап "каждый с каждым" + плей-офф из топ-2 групп;
//!   - триады (группы по трое, один победитель) + плей-офф.
//!
//! Исправление результата матча выкидывает все последующие раунды
//! и заново выводит их из исправленного.
//!
//! Слои:
//!   - `domain` – данные и инварианты;
//!   - `engine` – алгоритмы над `Tournament`;
//!   - `tournament` – лобби (жизненный цикл по категориям) и рантайм по формату;
//!   - `infra` – id, RNG, хранилище, маппинги;
//!   - `api` – команды, запросы, DTO.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod tournament;
