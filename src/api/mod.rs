//! Внешний API движка сетки.
//!
//! Здесь описываются:
//! - команды (commands.rs) – всё, что меняет состояние;
//! - запросы (queries.rs) – только чтение;
//! - DTO (dto.rs) – удобные структуры для внешнего приложения;
//! - ошибки (errors.rs) – то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
