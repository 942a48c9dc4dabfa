//! User domain models and parameters.
//!
//! Provides the domain model for registered accounts and the parameter types used for
//! registration and profile updates. Parameters are built from request DTOs and
//! validated on the way in, so repositories only ever see well-formed values.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{
        CreatedUserDto, PaginatedUsersDto, RegisterUserDto, UpdateUserDto, UserDto,
    },
    server::{
        error::validation::{ValidationError, REQUIRED},
        model::pagination::Page,
        util::validate::{self, MAX_EMAIL_LENGTH, MAX_USER_FIELD_LENGTH},
    },
};

/// Registered account without its credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Whether the user may manage tags, ingredients and other users' recipes.
    pub is_admin: bool,
    pub date_joined: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash stays behind in the entity.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            username: entity.username,
            first_name: entity.first_name,
            last_name: entity.last_name,
            is_admin: entity.is_admin,
            date_joined: entity.date_joined,
        }
    }

    /// Converts to the public representation as seen by a given viewer.
    ///
    /// # Arguments
    /// - `is_subscribed` - Whether the viewer follows this user
    pub fn into_dto(self, is_subscribed: bool) -> UserDto {
        UserDto {
            email: self.email,
            id: self.id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            is_subscribed,
        }
    }

    pub fn into_created_dto(self) -> CreatedUserDto {
        CreatedUserDto {
            email: self.email,
            id: self.id,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

/// User paired with the viewer's follow state.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user: User,
    pub is_subscribed: bool,
}

impl UserProfile {
    pub fn into_dto(self) -> UserDto {
        self.user.into_dto(self.is_subscribed)
    }
}

impl Page<UserProfile> {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            count: self.total,
            next: self.next(),
            previous: self.previous(),
            results: self.items.into_iter().map(UserProfile::into_dto).collect(),
        }
    }
}

/// Validated registration data; the password is still plain text here.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl RegisterUserParams {
    /// Validates every field of a registration request.
    ///
    /// Uniqueness of email and username is checked later against the database.
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        let email = validate::required_text(&mut errors, "email", dto.email, MAX_EMAIL_LENGTH)
            .filter(|email| validate::email(&mut errors, "email", email));
        let username = validate::required_text(
            &mut errors,
            "username",
            dto.username,
            MAX_USER_FIELD_LENGTH,
        )
        .filter(|username| validate::username(&mut errors, "username", username));
        let first_name = validate::required_text(
            &mut errors,
            "first_name",
            dto.first_name,
            MAX_USER_FIELD_LENGTH,
        );
        let last_name = validate::required_text(
            &mut errors,
            "last_name",
            dto.last_name,
            MAX_USER_FIELD_LENGTH,
        );
        let password = match dto.password.filter(|p| !p.is_empty()) {
            Some(password) => {
                Some(password).filter(|p| validate::password(&mut errors, "password", p))
            }
            None => {
                errors.add("password", REQUIRED);
                None
            }
        };

        match (email, username, first_name, last_name, password) {
            (Some(email), Some(username), Some(first_name), Some(last_name), Some(password))
                if errors.is_empty() =>
            {
                Ok(Self {
                    email,
                    username,
                    first_name,
                    last_name,
                    password,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Partial profile update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub id: i32,
    pub email: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::new();

        let email = validate::optional_text(&mut errors, "email", dto.email, MAX_EMAIL_LENGTH)
            .filter(|email| validate::email(&mut errors, "email", email));
        let username = validate::optional_text(
            &mut errors,
            "username",
            dto.username,
            MAX_USER_FIELD_LENGTH,
        )
        .filter(|username| validate::username(&mut errors, "username", username));
        let first_name = validate::optional_text(
            &mut errors,
            "first_name",
            dto.first_name,
            MAX_USER_FIELD_LENGTH,
        );
        let last_name = validate::optional_text(
            &mut errors,
            "last_name",
            dto.last_name,
            MAX_USER_FIELD_LENGTH,
        );

        errors.into_result()?;

        Ok(Self {
            id,
            email,
            username,
            first_name,
            last_name,
        })
    }
}
