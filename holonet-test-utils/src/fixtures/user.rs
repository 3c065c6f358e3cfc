//! User fixture utilities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{
    constant::{TEST_EMAIL, TEST_FIRSTNAME, TEST_LASTNAME, TEST_PASSWORD, TEST_USERNAME},
    error::TestError,
    model::UserModel,
};

/// Fixture helpers for inserting user rows.
pub struct UserFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a user with the canonical test values.
    pub async fn insert_user(&self) -> Result<UserModel, TestError> {
        self.insert_user_named(TEST_USERNAME).await
    }

    /// Insert a user with a specific username and otherwise canonical values.
    ///
    /// Useful when a test needs several distinguishable users.
    pub async fn insert_user_named(&self, username: &str) -> Result<UserModel, TestError> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(TEST_EMAIL.to_string()),
            password: ActiveValue::Set(TEST_PASSWORD.to_string()),
            firstname: ActiveValue::Set(TEST_FIRSTNAME.to_string()),
            lastname: ActiveValue::Set(TEST_LASTNAME.to_string()),
            ..Default::default()
        };

        Ok(user.insert(self.db).await?)
    }
}
