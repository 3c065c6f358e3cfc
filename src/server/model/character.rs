use crate::{
    model::character::{CreateCharacterDto, UpdateCharacterDto},
    server::{error::validation::ValidationError, model::require},
};

/// Fully validated payload for inserting a character row.
pub struct CreateCharacterParams {
    pub name: String,
    pub gender: String,
    pub species: String,
}

impl CreateCharacterParams {
    pub fn from_dto(dto: CreateCharacterDto) -> Result<Self, ValidationError> {
        let mut missing = Vec::new();

        let name = require(dto.name, "name", &mut missing);
        let gender = require(dto.gender, "gender", &mut missing);
        let species = require(dto.species, "species", &mut missing);

        match (name, gender, species) {
            (Some(name), Some(gender), Some(species)) => Ok(Self {
                name,
                gender,
                species,
            }),
            _ => Err(ValidationError::MissingFields {
                entity: "character",
                fields: missing,
            }),
        }
    }
}

/// Partial update for a character row; `None` fields are left untouched.
#[derive(Default)]
pub struct UpdateCharacterParams {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub species: Option<String>,
}

impl UpdateCharacterParams {
    pub fn from_dto(dto: UpdateCharacterDto) -> Self {
        Self {
            name: dto.name,
            gender: dto.gender,
            species: dto.species,
        }
    }

    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.gender.is_none() && self.species.is_none()
    }
}
