use crate::{
    model::{
        punishment::{BanCountDto, MyPunishmentDto, PunishmentDto},
        review::PunishmentKind,
    },
    server::model::{player::Player, review::ReviewInstance},
};

/// A ban or mute as recorded by the game server.
#[derive(Debug, Clone, PartialEq)]
pub struct Punishment {
    pub id: i32,
    pub uuid: String,
    /// `None` when the stored kind is neither `ban` nor `mute`.
    pub kind: Option<PunishmentKind>,
    pub reason: String,
    pub issued_by: String,
    /// Milliseconds since the Unix epoch, `0` for permanent.
    pub expires_at: i64,
}

impl Punishment {
    /// Sentinel written to `expires_at` to release a punishment immediately.
    pub const RELEASED_AT: i64 = 1;

    pub fn from_entity(entity: entity::punishment::Model) -> Self {
        Self {
            id: entity.id,
            kind: PunishmentKind::parse(&entity.kind),
            uuid: entity.uuid,
            reason: entity.reason,
            issued_by: entity.issued_by,
            expires_at: entity.expires_at,
        }
    }

    /// Whether the punishment is still in force at `now_ms`.
    pub fn is_active(&self, now_ms: i64) -> bool {
        self.expires_at == 0 || self.expires_at > now_ms
    }

    /// Converts to a DTO, naming and coloring the punished player when `target` is known.
    pub fn into_dto(self, target: Option<&Player>) -> PunishmentDto {
        PunishmentDto {
            id: self.id,
            kind: self.kind,
            uuid: self.uuid,
            username: target.map(|player| player.username.clone()),
            reason: self.reason,
            issued_by: self.issued_by,
            permanent: self.expires_at == 0,
            expires_at: self.expires_at,
            color_style: target.map(|player| player.colors().style).unwrap_or_default(),
        }
    }
}

/// A punishment together with the panel player it applies to, if known.
#[derive(Debug, Clone, PartialEq)]
pub struct PunishmentEntry {
    pub punishment: Punishment,
    pub target: Option<Player>,
}

impl PunishmentEntry {
    pub fn into_dto(self) -> PunishmentDto {
        self.punishment.into_dto(self.target.as_ref())
    }
}

/// A player's active punishments and the appeal against the one they would appeal.
#[derive(Debug, Clone, PartialEq)]
pub struct MyPunishment {
    pub player: Player,
    pub ban: Option<Punishment>,
    pub mute: Option<Punishment>,
    pub appeal: Option<ReviewInstance>,
}

impl MyPunishment {
    pub fn into_dto(self) -> MyPunishmentDto {
        let player = &self.player;
        MyPunishmentDto {
            has_ban: self.ban.is_some(),
            ban: self.ban.map(|ban| ban.into_dto(Some(player))),
            has_mute: self.mute.is_some(),
            mute: self.mute.map(|mute| mute.into_dto(Some(player))),
            appeal: self.appeal.map(ReviewInstance::into_status_dto),
        }
    }
}

/// Number of bans a staff member has issued.
#[derive(Debug, Clone, PartialEq)]
pub struct BanCount {
    pub player: Player,
    pub count: u64,
}

impl BanCount {
    pub fn into_dto(self) -> BanCountDto {
        BanCountDto {
            color_style: self.player.colors().style,
            username: self.player.username,
            uuid: self.player.uuid,
            rank: self.player.rank,
            ban_count: self.count,
        }
    }
}
