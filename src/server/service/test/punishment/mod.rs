use chrono::Utc;
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::review::PunishmentKind,
    server::{error::AppError, model::player::Player, service::punishment::PunishmentService},
};


const HOUR_MS: i64 = 60 * 60 * 1000;

async fn player(db: &DatabaseConnection, username: &str, rank: &str) -> Result<Player, AppError> {
    let model = factory::player::PlayerFactory::new(db)
        .username(username)
        .uuid(format!("uuid-{}", username.to_lowercase()))
        .rank(rank)
        .suffix("suffix.10.&e[Tag]")
        .build()
        .await?;
    Ok(Player::from_entity(model))
}
