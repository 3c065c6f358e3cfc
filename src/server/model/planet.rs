use crate::{
    model::planet::{CreatePlanetDto, UpdatePlanetDto},
    server::{error::validation::ValidationError, model::require},
};

/// Fully validated payload for inserting a planet row.
pub struct CreatePlanetParams {
    pub name: String,
    pub population: i64,
    pub terrain: String,
}

impl CreatePlanetParams {
    /// Checks that every required field is present.
    ///
    /// Population must be supplied at creation even though the column is
    /// nullable; its value is not range-checked.
    pub fn from_dto(dto: CreatePlanetDto) -> Result<Self, ValidationError> {
        let mut missing = Vec::new();

        let name = require(dto.name, "name", &mut missing);
        let population = require(dto.population, "population", &mut missing);
        let terrain = require(dto.terrain, "terrain", &mut missing);

        match (name, population, terrain) {
            (Some(name), Some(population), Some(terrain)) => Ok(Self {
                name,
                population,
                terrain,
            }),
            _ => Err(ValidationError::MissingFields {
                entity: "planet",
                fields: missing,
            }),
        }
    }
}

/// Partial update for a planet row; `None` fields are left untouched.
#[derive(Default)]
pub struct UpdatePlanetParams {
    pub name: Option<String>,
    pub population: Option<i64>,
    pub terrain: Option<String>,
}

impl UpdatePlanetParams {
    pub fn from_dto(dto: UpdatePlanetDto) -> Self {
        Self {
            name: dto.name,
            population: dto.population,
            terrain: dto.terrain,
        }
    }

    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.population.is_none() && self.terrain.is_none()
    }
}
