//! Ban and mute DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    rank::Rank,
    review::{PunishmentKind, SubmissionStatusDto},
};

/// A ban or mute, with the punished player resolved where the panel knows them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PunishmentDto {
    pub id: i32,
    /// `None` when the game server stored a kind the panel does not know.
    pub kind: Option<PunishmentKind>,
    pub uuid: String,
    /// Username of the punished player, `None` if they never joined the panel.
    pub username: Option<String>,
    pub reason: String,
    pub issued_by: String,
    /// Milliseconds since the Unix epoch, `0` for permanent.
    pub expires_at: i64,
    pub permanent: bool,
    /// CSS from the punished player's rank suffix.
    pub color_style: String,
}

/// The current player's active punishments and the state of their appeal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MyPunishmentDto {
    pub has_ban: bool,
    pub ban: Option<PunishmentDto>,
    pub has_mute: bool,
    pub mute: Option<PunishmentDto>,
    /// Latest appeal against the active ban, or against the mute when not banned.
    pub appeal: Option<SubmissionStatusDto>,
}

/// Bans issued by one staff member.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct BanCountDto {
    pub username: String,
    pub uuid: String,
    pub rank: Rank,
    pub ban_count: u64,
    pub color_style: String,
}
