//! SeaORM adapters. Functions here return `DbErr`; the repos layer maps to
//! `DomainError` through `infra::db_errors::map_db_err`.

pub mod authors_sea;
pub mod recipes_sea;
