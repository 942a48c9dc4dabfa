use crate::server::data::auth_token::AuthTokenRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete_for_user;
mod find_user_by_key;
mod get_or_create;
