//! Test context structure and utilities.
//!
//! The `TestContext` returned by `TestBuilder` wraps an in-memory SQLite
//! database and exposes fixture helpers for inserting rows during a test.

use sea_orm::{Database, DatabaseConnection};

use crate::{
    error::TestError,
    fixtures::{catalog::CatalogFixtures, favorite::FavoriteFixtures, user::UserFixtures},
};

/// Test context returned by [`TestBuilder`](crate::TestBuilder).
///
/// Provides access to the test database plus fixture helpers:
///
/// ```ignore
/// let test = TestBuilder::new().with_star_tables().build().await?;
///
/// let user = test.user().insert_user().await?;
/// let planet = test.catalog().insert_planet().await?;
/// test.favorite().insert_favorite_planet(user.id, planet.id).await?;
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database.
    pub db: DatabaseConnection,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Convert the database connection into any type constructible from it.
    ///
    /// This allows conversion to the application's `AppState` without a
    /// circular dependency between the test-utils crate and the main crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Fixture helpers for user rows.
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures::new(&self.db)
    }

    /// Fixture helpers for character and planet rows.
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures::new(&self.db)
    }

    /// Fixture helpers for favorite join rows.
    pub fn favorite(&self) -> FavoriteFixtures<'_> {
        FavoriteFixtures::new(&self.db)
    }
}
