//! HTTP request handlers.
//!
//! Each handler authenticates through `AuthGuard`, converts request DTOs into domain
//! params, calls a service and converts the result back into a response DTO.

pub mod auth;
pub mod follow;
pub mod ingredient;
pub mod recipe;
pub mod tag;
pub mod user;
