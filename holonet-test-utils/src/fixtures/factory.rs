//! Factory functions for in-memory database models.
//!
//! Pure functions returning model instances with standard test values, no
//! database interaction required. Suitable for unit tests of projections and
//! other logic that consumes models directly.

use crate::{
    constant::{
        TEST_CHARACTER_GENDER, TEST_CHARACTER_NAME, TEST_CHARACTER_SPECIES, TEST_EMAIL,
        TEST_FIRSTNAME, TEST_LASTNAME, TEST_PASSWORD, TEST_PLANET_NAME, TEST_PLANET_POPULATION,
        TEST_PLANET_TERRAIN, TEST_USERNAME,
    },
    model::{CharacterModel, FavoriteCharacterModel, FavoritePlanetModel, PlanetModel, UserModel},
};

/// Create an in-memory user model with standard test values.
pub fn mock_user_model(id: i32) -> UserModel {
    UserModel {
        id,
        username: TEST_USERNAME.to_string(),
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
        firstname: TEST_FIRSTNAME.to_string(),
        lastname: TEST_LASTNAME.to_string(),
    }
}

/// Create an in-memory character model with standard test values.
pub fn mock_character_model(id: i32) -> CharacterModel {
    CharacterModel {
        id,
        name: TEST_CHARACTER_NAME.to_string(),
        gender: TEST_CHARACTER_GENDER.to_string(),
        species: TEST_CHARACTER_SPECIES.to_string(),
    }
}

/// Create an in-memory planet model with standard test values.
pub fn mock_planet_model(id: i32) -> PlanetModel {
    PlanetModel {
        id,
        name: TEST_PLANET_NAME.to_string(),
        population: Some(TEST_PLANET_POPULATION),
        terrain: TEST_PLANET_TERRAIN.to_string(),
    }
}

/// Create an in-memory favorite character join row.
pub fn mock_favorite_character_model(
    id: i32,
    user_id: i32,
    character_id: i32,
) -> FavoriteCharacterModel {
    FavoriteCharacterModel {
        id,
        user_id,
        character_id,
    }
}

/// Create an in-memory favorite planet join row.
pub fn mock_favorite_planet_model(id: i32, user_id: i32, planet_id: i32) -> FavoritePlanetModel {
    FavoritePlanetModel {
        id,
        user_id,
        planet_id,
    }
}
