use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{auth_token::AuthTokenRepository, user::UserRepository},
    error::{auth::AuthError, internal::InternalError, AppError},
};

/// Length of issued token keys.
pub const TOKEN_KEY_LENGTH: usize = 40;

/// Service for password login and token lifecycle.
///
/// Tokens are opaque random keys stored server-side, one per user. A client sends the
/// key back as `Authorization: Token <key>` on every authenticated request.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks credentials and returns the user's token key.
    ///
    /// An existing token is reused so that logging in from a second device does not log
    /// out the first one.
    ///
    /// # Returns
    /// - `Ok(String)` - Token key
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email, wrong password
    ///   or missing field
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(
        &self,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<String, AppError> {
        let (Some(email), Some(password)) = (email, password) else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some((user, hash)) = UserRepository::new(self.db)
            .find_credentials_by_email(email.trim())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&password, &hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let key = AuthTokenRepository::new(self.db)
            .get_or_create(user.id, generate_token_key())
            .await?;

        tracing::info!("User {} logged in", user.id);

        Ok(key)
    }

    /// Deletes the user's token. Logging out without a token is not an error.
    pub async fn logout(&self, user_id: i32) -> Result<(), AppError> {
        AuthTokenRepository::new(self.db)
            .delete_for_user(user_id)
            .await?;

        tracing::info!("User {} logged out", user_id);

        Ok(())
    }
}

/// Hashes a password with Argon2id and a random salt into a PHC string.
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt_bytes: [u8; 16] = rand::random();
    let salt = SaltString::encode_b64(&salt_bytes)?;
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC string.
///
/// A stored value that is not a valid hash (such as an unusable password marker)
/// never matches.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(hash) => Argon2::default()
            .verify_password(password.as_bytes(), &hash)
            .is_ok(),
        Err(err) => {
            tracing::debug!("Stored password hash is not usable: {}", err);
            false
        }
    }
}

/// Generates a random alphanumeric token key of `TOKEN_KEY_LENGTH` characters.
pub fn generate_token_key() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..TOKEN_KEY_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
