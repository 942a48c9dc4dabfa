//! Request and response DTOs shared by every API endpoint.

pub mod api;
pub mod auth;
pub mod follow;
pub mod ingredient;
pub mod recipe;
pub mod tag;
pub mod user;
