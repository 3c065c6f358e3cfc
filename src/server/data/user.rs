use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel,
};

use crate::server::model::user::{CreateUserParams, UpdateUserParams};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user row
    pub async fn create(&self, params: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password),
            firstname: ActiveValue::Set(params.firstname),
            lastname: ActiveValue::Set(params.lastname),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Fetches a user by id
    pub async fn get(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Returns all user rows in whatever order the store yields them
    pub async fn list(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find().all(self.db).await
    }

    /// Applies the supplied fields to an existing user
    ///
    /// An empty set of fields performs no write and returns the row as-is.
    pub async fn update(
        &self,
        user_id: i32,
        params: UpdateUserParams,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id).one(self.db).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        if params.is_empty() {
            return Ok(Some(user));
        }

        let mut user_am = user.into_active_model();
        if let Some(username) = params.username {
            user_am.username = ActiveValue::Set(username);
        }
        if let Some(email) = params.email {
            user_am.email = ActiveValue::Set(email);
        }
        if let Some(password) = params.password {
            user_am.password = ActiveValue::Set(password);
        }
        if let Some(firstname) = params.firstname {
            user_am.firstname = ActiveValue::Set(firstname);
        }
        if let Some(lastname) = params.lastname {
            user_am.lastname = ActiveValue::Set(lastname);
        }

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of the user existing; to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id).exec(self.db).await
    }
}
