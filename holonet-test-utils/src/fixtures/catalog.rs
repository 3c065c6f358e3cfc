//! Character and planet fixture utilities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{
    constant::{
        TEST_CHARACTER_GENDER, TEST_CHARACTER_NAME, TEST_CHARACTER_SPECIES, TEST_PLANET_NAME,
        TEST_PLANET_POPULATION, TEST_PLANET_TERRAIN,
    },
    error::TestError,
    model::{CharacterModel, PlanetModel},
};

/// Fixture helpers for inserting character and planet rows.
pub struct CatalogFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a character with the canonical test values.
    pub async fn insert_character(&self) -> Result<CharacterModel, TestError> {
        self.insert_character_named(TEST_CHARACTER_NAME).await
    }

    /// Insert a character with a specific name and otherwise canonical values.
    pub async fn insert_character_named(&self, name: &str) -> Result<CharacterModel, TestError> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            gender: ActiveValue::Set(TEST_CHARACTER_GENDER.to_string()),
            species: ActiveValue::Set(TEST_CHARACTER_SPECIES.to_string()),
            ..Default::default()
        };

        Ok(character.insert(self.db).await?)
    }

    /// Insert a planet with the canonical test values.
    pub async fn insert_planet(&self) -> Result<PlanetModel, TestError> {
        self.insert_planet_named(TEST_PLANET_NAME).await
    }

    /// Insert a planet with a specific name and otherwise canonical values.
    pub async fn insert_planet_named(&self, name: &str) -> Result<PlanetModel, TestError> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            population: ActiveValue::Set(Some(TEST_PLANET_POPULATION)),
            terrain: ActiveValue::Set(TEST_PLANET_TERRAIN.to_string()),
            ..Default::default()
        };

        Ok(planet.insert(self.db).await?)
    }
}
