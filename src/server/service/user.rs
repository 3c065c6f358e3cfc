use sea_orm::DatabaseConnection;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{resource::ResourceError, Error},
        model::user::{CreateUserParams, UpdateUserParams},
    },
};

/// Service for user account CRUD operations.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates the payload and inserts a new user
    pub async fn create(&self, dto: CreateUserDto) -> Result<UserDto, Error> {
        let params = CreateUserParams::from_dto(dto)?;

        let user = UserRepository::new(self.db).create(params).await?;

        Ok(user.into())
    }

    /// All users, projected
    pub async fn list(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).list().await?;

        Ok(users.into_iter().map(Into::into).collect())
    }

    /// A single user, projected
    pub async fn get(&self, user_id: i32) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or(ResourceError::UserNotFound(user_id))?;

        Ok(user.into())
    }

    /// Applies a partial update and returns the updated projection
    pub async fn update(&self, user_id: i32, dto: UpdateUserDto) -> Result<UserDto, Error> {
        let user = UserRepository::new(self.db)
            .update(user_id, UpdateUserParams::from_dto(dto))
            .await?
            .ok_or(ResourceError::UserNotFound(user_id))?;

        Ok(user.into())
    }

    /// Deletes a user
    ///
    /// Favorites referencing the user are left in place; associations are
    /// only checked when they are created.
    pub async fn delete(&self, user_id: i32) -> Result<(), Error> {
        let result = UserRepository::new(self.db).delete(user_id).await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::UserNotFound(user_id).into());
        }

        Ok(())
    }
}
