//! Read-side views of bans and mutes for players and staff.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    model::{
        rank::Rank,
        review::{PunishmentKind, ReviewCategory},
    },
    server::{
        data::{
            player::PlayerRepository,
            punishment::PunishmentRepository,
            review::{ReviewRepository, ReviewStore},
        },
        error::AppError,
        model::{
            player::Player,
            punishment::{BanCount, MyPunishment, Punishment, PunishmentEntry},
        },
    },
};

/// Service providing punishment lookups.
pub struct PunishmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PunishmentService<'a> {
    /// Creates a new PunishmentService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets `player`'s newest active ban and mute, and their latest appeal against the
    /// ban, or against the mute when they are not banned.
    pub async fn my_punishment(&self, player: &Player) -> Result<MyPunishment, AppError> {
        let active = PunishmentRepository::new(self.db)
            .get_active_for_uuid(&player.uuid, Utc::now().timestamp_millis())
            .await?;

        let newest = |kind| active.iter().find(|p| p.kind == Some(kind)).cloned();
        let ban = newest(PunishmentKind::Ban);
        let mute = newest(PunishmentKind::Mute);

        let appeal = match ban.as_ref().or(mute.as_ref()) {
            Some(punishment) => ReviewRepository::new(self.db)
                .list_for_subject(ReviewCategory::Appeal, &player.username)
                .await?
                .into_iter()
                .find(|appeal| appeal.payload.punishment_id() == Some(punishment.id)),
            None => None,
        };

        Ok(MyPunishment {
            player: player.clone(),
            ban,
            mute,
            appeal,
        })
    }

    /// Gets every active punishment of `kind`, newest first.
    pub async fn get_active(
        &self,
        kind: PunishmentKind,
    ) -> Result<Vec<PunishmentEntry>, AppError> {
        let punishments = PunishmentRepository::new(self.db)
            .get_active(kind, Utc::now().timestamp_millis())
            .await?;

        self.with_targets(punishments).await
    }

    /// Gets every ban `issuer` has issued, active or not, newest first.
    pub async fn get_issued_bans(
        &self,
        issuer: &Player,
    ) -> Result<Vec<PunishmentEntry>, AppError> {
        let bans = PunishmentRepository::new(self.db)
            .get_issued_by(PunishmentKind::Ban, std::slice::from_ref(&issuer.username))
            .await?;

        self.with_targets(bans).await
    }

    /// Counts the bans issued by each staff member.
    ///
    /// Staff who never banned anyone are left out. Ordered by count, highest first, then
    /// by username.
    pub async fn get_top_bans(&self) -> Result<Vec<BanCount>, AppError> {
        let staff = PlayerRepository::new(self.db)
            .get_by_ranks(&Rank::STAFF)
            .await?;

        let usernames: Vec<String> = staff.iter().map(|p| p.username.clone()).collect();
        let bans = PunishmentRepository::new(self.db)
            .get_issued_by(PunishmentKind::Ban, &usernames)
            .await?;

        let mut counts: HashMap<&str, u64> = HashMap::new();
        for ban in &bans {
            *counts.entry(ban.issued_by.as_str()).or_default() += 1;
        }

        let mut top: Vec<BanCount> = staff
            .into_iter()
            .filter_map(|player| {
                let count = counts.get(player.username.as_str()).copied()?;
                Some(BanCount { player, count })
            })
            .collect();
        top.sort_by(|a, b| b.count.cmp(&a.count));

        Ok(top)
    }

    async fn with_targets(
        &self,
        punishments: Vec<Punishment>,
    ) -> Result<Vec<PunishmentEntry>, AppError> {
        let mut uuids: Vec<String> = punishments.iter().map(|p| p.uuid.clone()).collect();
        uuids.sort();
        uuids.dedup();

        let players: HashMap<String, Player> = PlayerRepository::new(self.db)
            .get_by_uuids(&uuids)
            .await?
            .into_iter()
            .map(|player| (player.uuid.clone(), player))
            .collect();

        Ok(punishments
            .into_iter()
            .map(|punishment| PunishmentEntry {
                target: players.get(&punishment.uuid).cloned(),
                punishment,
            })
            .collect())
    }
}
