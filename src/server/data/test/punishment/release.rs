use super::*;

/// Tests releasing a permanent ban.
///
/// Expected: Ok with expires_at set to the released sentinel
#[tokio::test]
async fn releases_punishment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Punishment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ban = factory::punishment::create_ban(db, "uuid-1").await?;
    assert_eq!(ban.expires_at, 0);

    release_punishment(db, ban.id).await?;

    let punishment = PunishmentRepository::new(db)
        .find_by_id(ban.id)
        .await?
        .unwrap();
    assert_eq!(punishment.expires_at, Punishment::RELEASED_AT);
    assert!(!punishment.is_active(chrono::Utc::now().timestamp_millis()));

    Ok(())
}

/// Tests releasing a punishment id with no row.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_missing_punishment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Punishment)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = release_punishment(db, 999).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
