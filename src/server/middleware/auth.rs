use sea_orm::DatabaseConnection;

use crate::server::{
    data::{auth_token::AuthTokenRepository, recipe::RecipeRepository},
    error::{auth::AuthError, AppError},
    middleware::token::TokenAuth,
    model::user::User,
};

pub enum Permission {
    /// User has admin privileges.
    Admin,
    /// User wrote the recipe with this ID, or is an admin.
    ///
    /// Fails with 404 when the recipe does not exist.
    RecipeAuthor(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    token: &'a TokenAuth,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, token: &'a TokenAuth) -> Self {
        Self { db, token }
    }

    /// Resolves the request's token to a user, if one was sent.
    ///
    /// Used by endpoints open to anonymous visitors that still personalize their
    /// response. A token that was sent but is unknown is rejected rather than ignored.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Valid token
    /// - `Ok(None)` - No token sent
    /// - `Err(AppError::AuthErr(InvalidToken))` - Token sent but unknown
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        let Some(key) = self.token.key() else {
            return Ok(None);
        };

        let Some(user) = AuthTokenRepository::new(self.db)
            .find_user_by_key(key)
            .await?
        else {
            return Err(AuthError::InvalidToken.into());
        };

        Ok(Some(user))
    }

    /// Requires an authenticated user holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AppError::AuthErr(MissingToken | InvalidToken))` - Not authenticated (401)
    /// - `Err(AppError::AuthErr(AccessDenied))` - Missing a permission (403)
    /// - `Err(AppError::NotFound)` - `RecipeAuthor` names a recipe that does not exist
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user) = self.optional().await? else {
            return Err(AuthError::MissingToken.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an admin-only action without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::RecipeAuthor(recipe_id) => {
                    let Some(author_id) = RecipeRepository::new(self.db)
                        .get_author_id(*recipe_id)
                        .await?
                    else {
                        return Err(AppError::NotFound("Recipe not found".to_string()));
                    };

                    if author_id != user.id && !user.is_admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!(
                                "User attempted to modify recipe {} owned by user {}",
                                recipe_id, author_id
                            ),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
