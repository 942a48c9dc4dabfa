//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types validate incoming DTOs before anything reaches the database.

pub mod follow;
pub mod ingredient;
pub mod pagination;
pub mod recipe;
pub mod shopping_list;
pub mod tag;
pub mod user;
