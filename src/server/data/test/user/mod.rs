use crate::server::{
    data::user::UserRepository,
    model::user::{RegisterUserParams, UpdateUserParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_credentials_by_email;
mod get_all_paginated;
mod set_admin_by_email;
mod taken;
mod update;

fn register_params(username: &str) -> RegisterUserParams {
    RegisterUserParams {
        email: format!("{}@example.com", username),
        username: username.to_string(),
        first_name: "Ivan".to_string(),
        last_name: "Petrov".to_string(),
        password: "s3cret-pass".to_string(),
    }
}
