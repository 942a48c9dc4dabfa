use crate::server::data::follow::FollowRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod followed_among;
mod get_authors_paginated;
