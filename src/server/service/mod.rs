//! Service layer.
//!
//! Services own the operation contracts the HTTP layer exposes: payload
//! validation on create, NotFound mapping for lookups, and the favorite
//! association rules. They coordinate repositories and project entity models
//! into the shared DTOs before anything leaves the boundary.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
