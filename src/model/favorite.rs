use serde::{Deserialize, Serialize};

use crate::model::{character::CharacterDto, planet::PlanetDto};

/// Public projection of a favorite character association.
///
/// The exposed `id` is the character's id, not the join row's; the two
/// favorite projections are deliberately asymmetric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteCharacterDto {
    pub id: i32,
    pub name: String,
    pub gender: String,
}

impl From<(entity::favorite_character::Model, entity::character::Model)> for FavoriteCharacterDto {
    fn from(
        (_favorite, character): (entity::favorite_character::Model, entity::character::Model),
    ) -> Self {
        Self {
            id: character.id,
            name: character.name,
            gender: character.gender,
        }
    }
}

/// Public projection of a favorite planet association: the join row's own id
/// plus the full serialized planet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritePlanetDto {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
    pub planet: PlanetDto,
}

impl From<(entity::favorite_planet::Model, entity::planet::Model)> for FavoritePlanetDto {
    fn from((favorite, planet): (entity::favorite_planet::Model, entity::planet::Model)) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet_id: favorite.planet_id,
            planet: planet.into(),
        }
    }
}

/// A user's favorites, grouped by kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserFavoritesDto {
    pub planets: Vec<PlanetDto>,
    pub characters: Vec<CharacterDto>,
}
