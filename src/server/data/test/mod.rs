mod auth_token;
mod collection;
mod follow;
mod ingredient;
mod recipe;
mod tag;
mod user;
