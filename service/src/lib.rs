pub mod dto;
pub mod error;
pub mod handicap;
pub mod mutation;
pub mod query;
pub mod scheduling;
pub mod tournament_log;

pub use mutation::*;
pub use query::*;

pub use sea_orm;
