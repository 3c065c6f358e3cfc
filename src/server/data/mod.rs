//! Data access layer repositories.
//!
//! One repository per table. Repositories are generic over the connection so
//! the same code runs against the Postgres deployment and the SQLite test
//! harness. Every operation is single-row; no multi-row transactions.

pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod planet;
pub mod user;
