use sea_orm::DatabaseConnection;

use crate::{
    model::character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    server::{
        data::character::CharacterRepository,
        error::{resource::ResourceError, Error},
        model::character::{CreateCharacterParams, UpdateCharacterParams},
    },
};

/// Service for character CRUD operations.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates the payload and inserts a new character
    pub async fn create(&self, dto: CreateCharacterDto) -> Result<CharacterDto, Error> {
        let params = CreateCharacterParams::from_dto(dto)?;

        let character = CharacterRepository::new(self.db).create(params).await?;

        Ok(character.into())
    }

    /// All characters, projected
    pub async fn list(&self) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db).list().await?;

        Ok(characters.into_iter().map(Into::into).collect())
    }

    /// A single character, projected
    pub async fn get(&self, character_id: i32) -> Result<CharacterDto, Error> {
        let character = CharacterRepository::new(self.db)
            .get(character_id)
            .await?
            .ok_or(ResourceError::CharacterNotFound(character_id))?;

        Ok(character.into())
    }

    /// Applies a partial update and returns the updated projection
    pub async fn update(
        &self,
        character_id: i32,
        dto: UpdateCharacterDto,
    ) -> Result<CharacterDto, Error> {
        let character = CharacterRepository::new(self.db)
            .update(character_id, UpdateCharacterParams::from_dto(dto))
            .await?
            .ok_or(ResourceError::CharacterNotFound(character_id))?;

        Ok(character.into())
    }

    /// Deletes a character, leaving any favorites referencing it in place
    pub async fn delete(&self, character_id: i32) -> Result<(), Error> {
        let result = CharacterRepository::new(self.db).delete(character_id).await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::CharacterNotFound(character_id).into());
        }

        Ok(())
    }
}
