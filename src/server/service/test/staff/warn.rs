use super::*;

/// Tests warning an existing staff member.
///
/// Expected: Ok with the warning stored under the target and issued by the actor
#[tokio::test]
async fn records_warning() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = Player::from_entity(factory::create_player_with_rank(db, "Admin", "admin").await?);
    factory::create_player_with_rank(db, "Steve", "mod").await?;

    let sync = game_sync();
    let warning = StaffService::new(db, &sync)
        .warn(&admin, "Steve", "  Abused mute  ")
        .await?;

    assert_eq!(warning.username, "Steve");
    assert_eq!(warning.reason, "Abused mute");
    assert_eq!(warning.issued_by, "Admin");
    assert_eq!(
        StaffWarningRepository::new(db)
            .get_by_username("Steve")
            .await?
            .len(),
        1
    );

    Ok(())
}

/// Tests warning with a blank reason.
///
/// Expected: Err(AppError::BadRequest) and nothing stored
#[tokio::test]
async fn rejects_blank_reason() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = Player::from_entity(factory::create_player_with_rank(db, "Admin", "admin").await?);
    factory::create_player_with_rank(db, "Steve", "mod").await?;

    let sync = game_sync();
    let result = StaffService::new(db, &sync).warn(&admin, "Steve", "   ").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(StaffWarningRepository::new(db)
        .get_by_username("Steve")
        .await?
        .is_empty());

    Ok(())
}

/// Tests warning a player that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_player_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = Player::from_entity(factory::create_player_with_rank(db, "Admin", "admin").await?);

    let sync = game_sync();
    let result = StaffService::new(db, &sync)
        .warn(&admin, "Nobody", "Spam")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests listing warnings after two were issued.
///
/// Expected: both warnings, newest first
#[tokio::test]
async fn lists_warnings_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = Player::from_entity(factory::create_player_with_rank(db, "Admin", "admin").await?);
    factory::create_player_with_rank(db, "Steve", "mod").await?;

    let sync = game_sync();
    let service = StaffService::new(db, &sync);
    service.warn(&admin, "Steve", "First").await?;
    service.warn(&admin, "Steve", "Second").await?;

    let warnings = service.get_warnings("Steve").await?;

    let reasons: Vec<_> = warnings.iter().map(|w| w.reason.as_str()).collect();
    assert_eq!(reasons, vec!["Second", "First"]);

    Ok(())
}
