//! Declarative test builder.
//!
//! `TestBuilder` configures the tables a test needs before execution; all
//! queued statements run during the final `build()` call, which returns a
//! [`TestContext`] for the test body to work with.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, DbBackend, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Chain configuration methods together and finalize with `build()` to get a
/// ready-to-use in-memory database.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_star_tables: bool,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_star_tables: false,
        }
    }

    /// Add every application table to the test database: User, Character,
    /// Planet, FavoriteCharacter, and FavoritePlanet.
    pub fn with_star_tables(mut self) -> Self {
        self.include_star_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, executed during
    /// `build()`. Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holonet_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holonet_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(Planet)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Execute all queued table creations and return the test context.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new().await?;

        let mut stmts = Vec::new();

        if self.include_star_tables {
            let schema = Schema::new(DbBackend::Sqlite);
            stmts.push(schema.create_table_from_entity(entity::prelude::User));
            stmts.push(schema.create_table_from_entity(entity::prelude::Character));
            stmts.push(schema.create_table_from_entity(entity::prelude::Planet));
            stmts.push(schema.create_table_from_entity(entity::prelude::FavoriteCharacter));
            stmts.push(schema.create_table_from_entity(entity::prelude::FavoritePlanet));
        }

        stmts.extend(self.tables);

        for stmt in stmts {
            test.db.execute(&stmt).await?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
