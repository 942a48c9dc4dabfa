//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Viewer Context**: Decorating results with the requesting user's favorites and follows

pub mod auth;
pub mod collection;
pub mod follow;
pub mod ingredient;
pub mod recipe;
pub mod seed;
pub mod shopping_list;
pub mod tag;
pub mod user;
