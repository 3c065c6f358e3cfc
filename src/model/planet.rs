use serde::{Deserialize, Serialize};

/// Public projection of a planet. Population is intentionally not part of
/// the output shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub terrain: String,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            terrain: planet.terrain,
        }
    }
}

/// Payload for creating a planet.
///
/// The population key is required even though the column is nullable; no
/// range check is applied, so negative populations are accepted as-is.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePlanetDto {
    pub name: Option<String>,
    pub population: Option<i64>,
    pub terrain: Option<String>,
}

/// Partial update for a planet; only supplied fields change.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatePlanetDto {
    pub name: Option<String>,
    pub population: Option<i64>,
    pub terrain: Option<String>,
}
