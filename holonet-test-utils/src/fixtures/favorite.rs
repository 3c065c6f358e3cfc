//! Favorite join-row fixture utilities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{
    error::TestError,
    model::{FavoriteCharacterModel, FavoritePlanetModel},
};

/// Fixture helpers for inserting favorite join rows.
///
/// Rows are inserted directly, bypassing the application's existence checks,
/// which also makes these helpers suitable for staging orphaned rows.
pub struct FavoriteFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a favorite character join row.
    pub async fn insert_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, TestError> {
        let favorite = entity::favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            ..Default::default()
        };

        Ok(favorite.insert(self.db).await?)
    }

    /// Insert a favorite planet join row.
    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, TestError> {
        let favorite = entity::favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        Ok(favorite.insert(self.db).await?)
    }
}
