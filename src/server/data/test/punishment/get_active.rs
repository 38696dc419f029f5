use super::*;

/// Tests listing active punishments of one kind.
///
/// Expected: active bans of every player, newest first; mutes and expired bans excluded
#[tokio::test]
async fn returns_active_of_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Punishment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now().timestamp_millis();

    let permanent = factory::punishment::create_ban(db, "uuid-steve").await?;
    factory::punishment::PunishmentFactory::new(db, "uuid-alex")
        .expires_at(now - HOUR_MS)
        .build()
        .await?;
    factory::punishment::PunishmentFactory::new(db, "uuid-alex")
        .kind("mute")
        .build()
        .await?;
    let temporary = factory::punishment::PunishmentFactory::new(db, "uuid-sam")
        .expires_at(now + HOUR_MS)
        .build()
        .await?;

    let bans = PunishmentRepository::new(db)
        .get_active(PunishmentKind::Ban, now)
        .await?;

    let ids: Vec<_> = bans.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![temporary.id, permanent.id]);

    Ok(())
}
