use crate::server::data::{favorite::FavoriteRepository, shopping_cart::ShoppingCartRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod favorite;
mod shopping_cart;
