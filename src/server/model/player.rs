//! Player domain model.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        rank::Rank,
        staff::{AuthStatusDto, PlayerProfileDto, StaffMemberDto, StaffWarningDto},
    },
    server::util::color::{parse_minecraft_colors, ColorStyle},
};

/// A player with their parsed rank.
///
/// The stored group name is parsed leniently, so a player whose group is unknown to the
/// panel is treated as `Rank::Default`.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub username: String,
    pub uuid: String,
    pub rank: Rank,
    /// Legacy suffix permission such as `suffix.100.&c&l[Admin]`.
    pub suffix: Option<String>,
}

impl Player {
    /// Converts an entity model to a player domain model at the repository boundary.
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            username: entity.username,
            rank: Rank::from_group(&entity.rank),
            uuid: entity.uuid,
            suffix: entity.suffix,
        }
    }

    /// CSS decoded from the player's suffix; empty without one.
    pub fn colors(&self) -> ColorStyle {
        self.suffix
            .as_deref()
            .map(parse_minecraft_colors)
            .unwrap_or_default()
    }

    /// Converts the player into a staff listing entry, resolving suffix color codes to CSS.
    pub fn into_staff_dto(self) -> StaffMemberDto {
        let colors = self.colors();

        StaffMemberDto {
            rank_color: colors.rank_color(),
            username: self.username,
            uuid: self.uuid,
            rank: self.rank,
            suffix: self.suffix,
            color_style: colors.style,
            hex_color: colors.hex_color,
        }
    }

    pub fn into_profile_dto(self) -> PlayerProfileDto {
        let colors = self.colors();

        PlayerProfileDto {
            rank_color: colors.rank_color(),
            username: self.username,
            uuid: self.uuid,
            rank: self.rank,
            color_style: colors.style,
        }
    }

    pub fn into_auth_status_dto(self) -> AuthStatusDto {
        AuthStatusDto {
            logged_in: true,
            is_staff: self.rank.is_staff(),
            is_senior_staff: self.rank.is_senior_staff(),
            is_admin: self.rank.is_admin(),
            username: Some(self.username),
            rank: Some(self.rank),
        }
    }
}

/// A warning issued to a staff member by an admin.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffWarning {
    pub id: i32,
    pub username: String,
    pub reason: String,
    pub issued_by: String,
    pub created_at: DateTime<Utc>,
}

impl StaffWarning {
    pub fn from_entity(entity: entity::staff_warning::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            reason: entity.reason,
            issued_by: entity.issued_by,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> StaffWarningDto {
        StaffWarningDto {
            id: self.id,
            username: self.username,
            reason: self.reason,
            issued_by: self.issued_by,
            created_at: self.created_at,
        }
    }
}

/// Parameters for recording a staff warning.
#[derive(Debug, Clone)]
pub struct CreateStaffWarningParam {
    pub username: String,
    pub reason: String,
    pub issued_by: String,
}
