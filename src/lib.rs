//! Holonet: a REST backend for a Star Wars fan database.
//!
//! Manages user accounts, a catalog of characters and planets, and the
//! favorite associations between users and catalog entries.

pub mod model;
pub mod server;
