use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::model::character::{CreateCharacterParams, UpdateCharacterParams};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new character row
    pub async fn create(
        &self,
        params: CreateCharacterParams,
    ) -> Result<entity::character::Model, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(params.name),
            gender: ActiveValue::Set(params.gender),
            species: ActiveValue::Set(params.species),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Fetches a character by id
    pub async fn get(&self, character_id: i32) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Fetches every character whose id appears in `character_ids`
    pub async fn get_many_by_ids(
        &self,
        character_ids: Vec<i32>,
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::Id.is_in(character_ids))
            .all(self.db)
            .await
    }

    /// Returns all character rows in whatever order the store yields them
    pub async fn list(&self) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find().all(self.db).await
    }

    /// Applies the supplied fields to an existing character
    ///
    /// An empty set of fields performs no write and returns the row as-is.
    pub async fn update(
        &self,
        character_id: i32,
        params: UpdateCharacterParams,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        let character = match entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await?
        {
            Some(character) => character,
            None => return Ok(None),
        };

        if params.is_empty() {
            return Ok(Some(character));
        }

        let mut character_am = character.into_active_model();
        if let Some(name) = params.name {
            character_am.name = ActiveValue::Set(name);
        }
        if let Some(gender) = params.gender {
            character_am.gender = ActiveValue::Set(gender);
        }
        if let Some(species) = params.species {
            character_am.species = ActiveValue::Set(species);
        }

        let character = character_am.update(self.db).await?;

        Ok(Some(character))
    }

    /// Deletes a character
    ///
    /// Returns OK regardless of the character existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use holonet_test_utils::prelude::*;

        use crate::server::{
            data::character::CharacterRepository, model::character::CreateCharacterParams,
        };

        /// Expect success when creating a new character
        #[tokio::test]
        async fn creates_character() -> Result<(), TestError> {
            let test = TestBuilder::new().with_star_tables().build().await?;

            let character_repository = CharacterRepository::new(&test.db);
            let result = character_repository
                .create(CreateCharacterParams {
                    name: "Han Solo".to_string(),
                    gender: "male".to_string(),
                    species: "human".to_string(),
                })
                .await;

            assert!(result.is_ok());
            assert_eq!(result.unwrap().name, "Han Solo");

            Ok(())
        }
    }

    mod get_many_by_ids {
        use holonet_test_utils::prelude::*;

        use crate::server::data::character::CharacterRepository;

        /// Only rows with matching ids come back
        #[tokio::test]
        async fn filters_to_requested_ids() -> Result<(), TestError> {
            let test = TestBuilder::new().with_star_tables().build().await?;
            let first = test.catalog().insert_character_named("Leia Organa").await?;
            test.catalog().insert_character_named("Han Solo").await?;
            let third = test.catalog().insert_character_named("Chewbacca").await?;

            let character_repository = CharacterRepository::new(&test.db);
            let result = character_repository
                .get_many_by_ids(vec![first.id, third.id])
                .await;

            assert!(result.is_ok());
            let characters = result.unwrap();
            assert_eq!(characters.len(), 2);

            Ok(())
        }
    }

    mod update {
        use holonet_test_utils::prelude::*;

        use crate::server::{
            data::character::CharacterRepository, model::character::UpdateCharacterParams,
        };

        /// Expect only the supplied field to change
        #[tokio::test]
        async fn updates_supplied_fields_only() -> Result<(), TestError> {
            let test = TestBuilder::new().with_star_tables().build().await?;
            let character_model = test.catalog().insert_character().await?;

            let character_repository = CharacterRepository::new(&test.db);
            let result = character_repository
                .update(
                    character_model.id,
                    UpdateCharacterParams {
                        gender: Some("unknown".to_string()),
                        ..Default::default()
                    },
                )
                .await;

            assert!(matches!(result, Ok(Some(_))));
            let updated = result.unwrap().unwrap();
            assert_eq!(updated.gender, "unknown");
            assert_eq!(updated.name, character_model.name);

            Ok(())
        }

        /// An empty partial update leaves the row untouched
        #[tokio::test]
        async fn empty_update_changes_nothing() -> Result<(), TestError> {
            let test = TestBuilder::new().with_star_tables().build().await?;
            let character_model = test.catalog().insert_character().await?;

            let character_repository = CharacterRepository::new(&test.db);
            let result = character_repository
                .update(character_model.id, UpdateCharacterParams::default())
                .await;

            assert!(matches!(result, Ok(Some(_))));
            assert_eq!(result.unwrap().unwrap(), character_model);

            Ok(())
        }
    }

    mod delete {
        use holonet_test_utils::prelude::*;

        use crate::server::data::character::CharacterRepository;

        /// Delete then get yields None
        #[tokio::test]
        async fn deleted_character_is_gone() -> Result<(), TestError> {
            let test = TestBuilder::new().with_star_tables().build().await?;
            let character_model = test.catalog().insert_character().await?;

            let character_repository = CharacterRepository::new(&test.db);
            let delete_result = character_repository.delete(character_model.id).await?;
            assert_eq!(delete_result.rows_affected, 1);

            let result = character_repository.get(character_model.id).await;
            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }
}
