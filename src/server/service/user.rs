use sea_orm::DatabaseConnection;

use crate::server::{
    data::{follow::FollowRepository, user::UserRepository},
    error::{
        validation::{ValidationError, REQUIRED},
        AppError,
    },
    model::{
        pagination::{Page, PageParams},
        user::{RegisterUserParams, UpdateUserParams, User, UserProfile},
    },
    service::auth::{hash_password, verify_password},
    util::validate,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user after checking email and username are free.
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        self.check_unique(Some(&params.email), Some(&params.username), None)
            .await?;

        let password_hash = hash_password(&params.password)?;
        let user = repo.create(&params, password_hash).await?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        Ok(user)
    }

    /// Gets a user as seen by `viewer_id`.
    pub async fn get_profile(
        &self,
        user_id: i32,
        viewer_id: Option<i32>,
    ) -> Result<Option<UserProfile>, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Ok(None);
        };

        let mut profiles = self.with_subscriptions(vec![user], viewer_id).await?;

        Ok(profiles.pop())
    }

    /// Gets a page of all users as seen by `viewer_id`.
    pub async fn get_paginated(
        &self,
        page: PageParams,
        viewer_id: Option<i32>,
    ) -> Result<Page<UserProfile>, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page.index(), page.limit)
            .await?;

        let profiles = self.with_subscriptions(users, viewer_id).await?;

        Ok(Page::new(profiles, total, page))
    }

    /// Applies a partial update to the user's own profile.
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        self.check_unique(
            params.email.as_deref(),
            params.username.as_deref(),
            Some(params.id),
        )
        .await?;

        UserRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Changes the user's password after verifying the current one.
    pub async fn set_password(
        &self,
        user_id: i32,
        current_password: Option<String>,
        new_password: Option<String>,
    ) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);
        let mut errors = ValidationError::new();

        let current_password = current_password.filter(|p| !p.is_empty());
        let new_password = new_password.filter(|p| !p.is_empty());
        if current_password.is_none() {
            errors.add("current_password", REQUIRED);
        }
        match new_password.as_deref() {
            Some(password) => {
                validate::password(&mut errors, "new_password", password);
            }
            None => errors.add("new_password", REQUIRED),
        }
        let (current_password, new_password) = match (current_password, new_password) {
            (Some(current), Some(new)) if errors.is_empty() => (current, new),
            _ => return Err(errors.into()),
        };

        let hash = repo
            .get_password_hash(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !verify_password(&current_password, &hash) {
            return Err(ValidationError::field("current_password", "Invalid password.").into());
        }

        repo.set_password_hash(user_id, hash_password(&new_password)?)
            .await?;

        tracing::info!("User {} changed their password", user_id);

        Ok(())
    }

    /// Grants admin rights to the user registered with `email`, if any.
    ///
    /// # Returns
    /// - `Ok(true)` - User found and promoted
    /// - `Ok(false)` - No user with that email yet
    pub async fn promote_admin(&self, email: &str) -> Result<bool, AppError> {
        Ok(UserRepository::new(self.db)
            .set_admin_by_email(email, true)
            .await?)
    }

    async fn check_unique(
        &self,
        email: Option<&str>,
        username: Option<&str>,
        exclude_user_id: Option<i32>,
    ) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);
        let mut errors = ValidationError::new();

        if let Some(email) = email {
            if repo.email_taken(email, exclude_user_id).await? {
                errors.add("email", "A user with that email already exists.");
            }
        }
        if let Some(username) = username {
            if repo.username_taken(username, exclude_user_id).await? {
                errors.add("username", "A user with that username already exists.");
            }
        }

        Ok(errors.into_result()?)
    }

    async fn with_subscriptions(
        &self,
        users: Vec<User>,
        viewer_id: Option<i32>,
    ) -> Result<Vec<UserProfile>, AppError> {
        let followed = match viewer_id {
            Some(viewer_id) => {
                let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
                FollowRepository::new(self.db)
                    .followed_among(viewer_id, &ids)
                    .await?
            }
            None => Default::default(),
        };

        Ok(users
            .into_iter()
            .map(|user| UserProfile {
                is_subscribed: followed.contains(&user.id),
                user,
            })
            .collect())
    }
}
