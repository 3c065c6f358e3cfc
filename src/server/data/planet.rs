use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::model::planet::{CreatePlanetParams, UpdatePlanetParams};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new planet row
    pub async fn create(&self, params: CreatePlanetParams) -> Result<entity::planet::Model, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(params.name),
            population: ActiveValue::Set(Some(params.population)),
            terrain: ActiveValue::Set(params.terrain),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    /// Fetches a planet by id
    pub async fn get(&self, planet_id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id).one(self.db).await
    }

    /// Fetches every planet whose id appears in `planet_ids`
    pub async fn get_many_by_ids(
        &self,
        planet_ids: Vec<i32>,
    ) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .filter(entity::planet::Column::Id.is_in(planet_ids))
            .all(self.db)
            .await
    }

    /// Returns all planet rows in whatever order the store yields them
    pub async fn list(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find().all(self.db).await
    }

    /// Applies the supplied fields to an existing planet
    ///
    /// An empty set of fields performs no write and returns the row as-is.
    pub async fn update(
        &self,
        planet_id: i32,
        params: UpdatePlanetParams,
    ) -> Result<Option<entity::planet::Model>, DbErr> {
        let planet = match entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await?
        {
            Some(planet) => planet,
            None => return Ok(None),
        };

        if params.is_empty() {
            return Ok(Some(planet));
        }

        let mut planet_am = planet.into_active_model();
        if let Some(name) = params.name {
            planet_am.name = ActiveValue::Set(name);
        }
        if let Some(population) = params.population {
            planet_am.population = ActiveValue::Set(Some(population));
        }
        if let Some(terrain) = params.terrain {
            planet_am.terrain = ActiveValue::Set(terrain);
        }

        let planet = planet_am.update(self.db).await?;

        Ok(Some(planet))
    }

    /// Deletes a planet
    ///
    /// Returns OK regardless of the planet existing; check
    /// [`DeleteResult::rows_affected`] for the outcome.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
