use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::favorite::{FavoriteCharacterDto, FavoritePlanetDto, UserFavoritesDto},
    server::{
        data::{
            character::CharacterRepository, favorite_character::FavoriteCharacterRepository,
            favorite_planet::FavoritePlanetRepository, planet::PlanetRepository,
            user::UserRepository,
        },
        error::{favorite::FavoriteError, Error},
    },
};

/// Mediates creation and removal of favorite associations.
///
/// Existence of both sides is verified when an association is created and
/// never again afterwards; removal and listing consult the join tables only.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a character as a favorite of a user
    ///
    /// Fails with NotFound when either side does not exist. Inserts
    /// unconditionally otherwise; favoriting twice produces two rows.
    pub async fn add_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterDto, Error> {
        let user = UserRepository::new(self.db).get(user_id).await?;
        let character = CharacterRepository::new(self.db).get(character_id).await?;

        let character = match (user, character) {
            (Some(_), Some(character)) => character,
            _ => {
                return Err(FavoriteError::UserOrCharacterNotFound {
                    user_id,
                    character_id,
                }
                .into())
            }
        };

        let favorite = FavoriteCharacterRepository::new(self.db)
            .create(user_id, character_id)
            .await?;

        Ok((favorite, character).into())
    }

    /// Marks a planet as a favorite of a user
    pub async fn add_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetDto, Error> {
        let user = UserRepository::new(self.db).get(user_id).await?;
        let planet = PlanetRepository::new(self.db).get(planet_id).await?;

        let planet = match (user, planet) {
            (Some(_), Some(planet)) => planet,
            _ => return Err(FavoriteError::UserOrPlanetNotFound { user_id, planet_id }.into()),
        };

        let favorite = FavoritePlanetRepository::new(self.db)
            .create(user_id, planet_id)
            .await?;

        Ok((favorite, planet).into())
    }

    /// Removes one favorite character entry for the user
    ///
    /// When duplicates exist exactly one row is removed. Only the join table
    /// is consulted, so entries for deleted users or characters can still be
    /// cleaned up.
    pub async fn remove_character(&self, user_id: i32, character_id: i32) -> Result<(), Error> {
        let repository = FavoriteCharacterRepository::new(self.db);

        let favorite = repository
            .get_by_user_and_character(user_id, character_id)
            .await?
            .ok_or(FavoriteError::CharacterNotFavorited {
                user_id,
                character_id,
            })?;

        repository.delete(favorite.id).await?;

        Ok(())
    }

    /// Removes one favorite planet entry for the user
    pub async fn remove_planet(&self, user_id: i32, planet_id: i32) -> Result<(), Error> {
        let repository = FavoritePlanetRepository::new(self.db);

        let favorite = repository
            .get_by_user_and_planet(user_id, planet_id)
            .await?
            .ok_or(FavoriteError::PlanetNotFavorited { user_id, planet_id })?;

        repository.delete(favorite.id).await?;

        Ok(())
    }

    /// The user's favorite characters and planets, projected
    ///
    /// A user with no favorites of either kind is reported as NotFound
    /// rather than as two empty lists. Join rows whose target has since been
    /// deleted are skipped.
    pub async fn list(&self, user_id: i32) -> Result<UserFavoritesDto, Error> {
        let favorite_characters = FavoriteCharacterRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;
        let favorite_planets = FavoritePlanetRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        if favorite_characters.is_empty() && favorite_planets.is_empty() {
            return Err(FavoriteError::NoFavorites(user_id).into());
        }

        let characters = CharacterRepository::new(self.db)
            .get_many_by_ids(favorite_characters.iter().map(|f| f.character_id).collect())
            .await?;
        let characters: HashMap<i32, entity::character::Model> =
            characters.into_iter().map(|c| (c.id, c)).collect();

        let planets = PlanetRepository::new(self.db)
            .get_many_by_ids(favorite_planets.iter().map(|f| f.planet_id).collect())
            .await?;
        let planets: HashMap<i32, entity::planet::Model> =
            planets.into_iter().map(|p| (p.id, p)).collect();

        Ok(UserFavoritesDto {
            planets: favorite_planets
                .iter()
                .filter_map(|favorite| planets.get(&favorite.planet_id).cloned())
                .map(Into::into)
                .collect(),
            characters: favorite_characters
                .iter()
                .filter_map(|favorite| characters.get(&favorite.character_id).cloned())
                .map(Into::into)
                .collect(),
        })
    }
}
