use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::review::{AppealForm, PunishmentKind, ReportForm, ReviewCategory},
    server::{
        data::punishment::PunishmentRepository,
        error::{review::ReviewError, AppError},
        model::{player::Player, punishment::Punishment},
        service::submission::SubmissionService,
    },
};

use super::{RecordingNotifier, APP_URL};

mod submit_appeal;

async fn player(db: &DatabaseConnection, username: &str) -> Result<Player, AppError> {
    let model = factory::player::PlayerFactory::new(db)
        .username(username)
        .build()
        .await?;
    Ok(Player::from_entity(model))
}

fn appeal_form(punishment_id: i32, punishment_kind: PunishmentKind) -> AppealForm {
    AppealForm {
        punishment_id,
        punishment_kind,
        reason: "I was not using a client".to_string(),
    }
}
