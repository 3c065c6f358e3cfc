use sea_orm::DatabaseConnection;

use crate::{
    model::planet::{CreatePlanetDto, PlanetDto, UpdatePlanetDto},
    server::{
        data::planet::PlanetRepository,
        error::{resource::ResourceError, Error},
        model::planet::{CreatePlanetParams, UpdatePlanetParams},
    },
};

/// Service for planet CRUD operations.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates the payload and inserts a new planet
    pub async fn create(&self, dto: CreatePlanetDto) -> Result<PlanetDto, Error> {
        let params = CreatePlanetParams::from_dto(dto)?;

        let planet = PlanetRepository::new(self.db).create(params).await?;

        Ok(planet.into())
    }

    /// All planets, projected
    pub async fn list(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).list().await?;

        Ok(planets.into_iter().map(Into::into).collect())
    }

    /// A single planet, projected
    pub async fn get(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let planet = PlanetRepository::new(self.db)
            .get(planet_id)
            .await?
            .ok_or(ResourceError::PlanetNotFound(planet_id))?;

        Ok(planet.into())
    }

    /// Applies a partial update and returns the updated projection
    pub async fn update(&self, planet_id: i32, dto: UpdatePlanetDto) -> Result<PlanetDto, Error> {
        let planet = PlanetRepository::new(self.db)
            .update(planet_id, UpdatePlanetParams::from_dto(dto))
            .await?
            .ok_or(ResourceError::PlanetNotFound(planet_id))?;

        Ok(planet.into())
    }

    /// Deletes a planet, leaving any favorites referencing it in place
    pub async fn delete(&self, planet_id: i32) -> Result<(), Error> {
        let result = PlanetRepository::new(self.db).delete(planet_id).await?;

        if result.rows_affected == 0 {
            return Err(ResourceError::PlanetNotFound(planet_id).into());
        }

        Ok(())
    }
}
