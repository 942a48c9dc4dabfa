//! Request authentication.
//!
//! - `token` - Extracts the `Authorization: Token <key>` credential from a request
//! - `auth` - `AuthGuard`, resolving the credential to a user and checking permissions
//! - `extract` - JSON, query and path extractors whose rejections become `AppError`

pub mod auth;
pub mod extract;
pub mod token;

#[cfg(test)]
mod test;
