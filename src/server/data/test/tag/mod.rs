use crate::server::{data::tag::TagRepository, model::tag::CreateTagParams};
use entity::prelude::Tag;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_conflicts;
mod get_all;
