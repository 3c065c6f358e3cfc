use serde::{Deserialize, Serialize};

/// Public projection of a character. Species is intentionally not part of
/// the output shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub gender: String,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
            gender: character.gender,
        }
    }
}

/// Payload for creating a character. Every field is required.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateCharacterDto {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub species: Option<String>,
}

/// Partial update for a character; only supplied fields change.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateCharacterDto {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub species: Option<String>,
}

#[cfg(test)]
mod tests {
    use holonet_test_utils::prelude::factory;

    use super::CharacterDto;

    #[test]
    fn serialized_character_omits_species() {
        let dto = CharacterDto::from(factory::mock_character_model(3));
        let value = serde_json::to_value(&dto).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(!object.contains_key("species"));
    }
}
