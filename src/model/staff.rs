use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::rank::Rank;

/// Request body for promote, demote and set-rank.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ChangeRankDto {
    pub username: String,
    #[serde(alias = "newRank")]
    pub new_rank: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct WarnStaffDto {
    pub username: String,
    pub reason: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StaffWarningDto {
    pub id: i32,
    pub username: String,
    pub reason: String,
    pub issued_by: String,
    pub created_at: DateTime<Utc>,
}

/// A staff member decorated with the CSS derived from their rank suffix.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StaffMemberDto {
    pub username: String,
    pub uuid: String,
    pub rank: Rank,
    pub suffix: Option<String>,
    pub color_style: String,
    pub hex_color: Option<String>,
    /// `hex_color`, or `#00AAAA` when the suffix has no color.
    pub rank_color: String,
}

/// Public profile of any player.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct PlayerProfileDto {
    pub username: String,
    pub uuid: String,
    pub rank: Rank,
    pub color_style: String,
    pub rank_color: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AuthStatusDto {
    pub logged_in: bool,
    pub username: Option<String>,
    pub rank: Option<Rank>,
    pub is_staff: bool,
    pub is_senior_staff: bool,
    pub is_admin: bool,
}

impl AuthStatusDto {
    pub fn logged_out() -> Self {
        Self {
            logged_in: false,
            username: None,
            rank: None,
            is_staff: false,
            is_senior_staff: false,
            is_admin: false,
        }
    }
}
