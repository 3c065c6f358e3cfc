//! Database model type aliases for test utilities.
//!
//! Convenient aliases for the SeaORM entity models used throughout the test
//! utilities and the main crate's tests.

/// Type alias for the user database model.
pub type UserModel = entity::user::Model;

/// Type alias for the character database model.
pub type CharacterModel = entity::character::Model;

/// Type alias for the planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for the favorite character join-row model.
pub type FavoriteCharacterModel = entity::favorite_character::Model;

/// Type alias for the favorite planet join-row model.
pub type FavoritePlanetModel = entity::favorite_planet::Model;
