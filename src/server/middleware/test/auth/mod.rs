use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        token::TokenAuth,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod optional;
mod require;
