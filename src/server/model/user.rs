use crate::{
    model::user::{CreateUserDto, UpdateUserDto},
    server::{error::validation::ValidationError, model::require},
};

/// Fully validated payload for inserting a user row.
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub firstname: String,
    pub lastname: String,
}

impl CreateUserParams {
    /// Checks that every required field is present in the payload.
    ///
    /// Presence is the only check; values are stored verbatim.
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, ValidationError> {
        let mut missing = Vec::new();

        let username = require(dto.username, "username", &mut missing);
        let email = require(dto.email, "email", &mut missing);
        let password = require(dto.password, "password", &mut missing);
        let firstname = require(dto.firstname, "firstname", &mut missing);
        let lastname = require(dto.lastname, "lastname", &mut missing);

        match (username, email, password, firstname, lastname) {
            (Some(username), Some(email), Some(password), Some(firstname), Some(lastname)) => {
                Ok(Self {
                    username,
                    email,
                    password,
                    firstname,
                    lastname,
                })
            }
            _ => Err(ValidationError::MissingFields {
                entity: "user",
                fields: missing,
            }),
        }
    }
}

/// Partial update for a user row; `None` fields are left untouched.
#[derive(Default)]
pub struct UpdateUserParams {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            password: dto.password,
            firstname: dto.firstname,
            lastname: dto.lastname,
        }
    }

    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.firstname.is_none()
            && self.lastname.is_none()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::user::CreateUserDto, server::error::validation::ValidationError,
        server::model::user::CreateUserParams,
    };

    fn full_dto() -> CreateUserDto {
        CreateUserDto {
            username: Some("ana".to_string()),
            email: Some("a@a.com".to_string()),
            password: Some("x".to_string()),
            firstname: Some("Ana".to_string()),
            lastname: Some("Lee".to_string()),
        }
    }

    #[test]
    fn accepts_complete_payload() {
        let result = CreateUserParams::from_dto(full_dto());

        assert!(result.is_ok());
        let params = result.unwrap();
        assert_eq!(params.username, "ana");
        assert_eq!(params.lastname, "Lee");
    }

    #[test]
    fn reports_every_missing_field() {
        let dto = CreateUserDto {
            username: None,
            password: None,
            ..full_dto()
        };

        let result = CreateUserParams::from_dto(dto);

        let Err(ValidationError::MissingFields { entity, fields }) = result else {
            panic!("expected validation error");
        };
        assert_eq!(entity, "user");
        assert_eq!(fields, vec!["username", "password"]);
    }
}
