use super::*;

/// Tests appealing an active ban owned by the player.
///
/// Expected: Ok with a pending appeal linked to the punishment and the ban untouched
#[tokio::test]
async fn stores_appeal_for_own_punishment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let steve = player(db, "Steve").await?;
    let ban = factory::create_ban(db, &steve.uuid).await?;

    let notifier = RecordingNotifier::default();
    let instance = SubmissionService::new(db, &notifier, APP_URL)
        .submit_appeal(&steve, appeal_form(ban.id, PunishmentKind::Ban))
        .await?;

    assert_eq!(instance.category, ReviewCategory::Appeal);
    assert_eq!(instance.payload.punishment_id(), Some(ban.id));
    assert_eq!(notifier.events().len(), 1);

    let stored = PunishmentRepository::new(db)
        .find_by_id(ban.id)
        .await?
        .unwrap();
    assert_eq!(stored.expires_at, 0);

    Ok(())
}

/// Tests appealing another player's punishment.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_foreign_punishment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let steve = player(db, "Steve").await?;
    let alex = player(db, "Alex").await?;
    let ban = factory::create_ban(db, &alex.uuid).await?;

    let notifier = RecordingNotifier::default();
    let result = SubmissionService::new(db, &notifier, APP_URL)
        .submit_appeal(&steve, appeal_form(ban.id, PunishmentKind::Ban))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(notifier.events().is_empty());

    Ok(())
}

/// Tests appealing a punishment id that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_punishment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let steve = player(db, "Steve").await?;

    let notifier = RecordingNotifier::default();
    let result = SubmissionService::new(db, &notifier, APP_URL)
        .submit_appeal(&steve, appeal_form(404, PunishmentKind::Ban))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests appealing a mute while claiming it is a ban.
///
/// Expected: Err(ReviewError::Validation)
#[tokio::test]
async fn rejects_kind_mismatch() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let steve = player(db, "Steve").await?;
    let mute = factory::punishment::PunishmentFactory::new(db, steve.uuid.clone())
        .kind("mute")
        .build()
        .await?;

    let notifier = RecordingNotifier::default();
    let result = SubmissionService::new(db, &notifier, APP_URL)
        .submit_appeal(&steve, appeal_form(mute.id, PunishmentKind::Ban))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReviewErr(ReviewError::Validation(_)))
    ));

    Ok(())
}

/// Tests appealing a punishment that has already been released.
///
/// Expected: Err(ReviewError::Validation)
#[tokio::test]
async fn rejects_expired_punishment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let steve = player(db, "Steve").await?;
    let ban = factory::punishment::PunishmentFactory::new(db, steve.uuid.clone())
        .expires_at(Punishment::RELEASED_AT)
        .build()
        .await?;

    let notifier = RecordingNotifier::default();
    let result = SubmissionService::new(db, &notifier, APP_URL)
        .submit_appeal(&steve, appeal_form(ban.id, PunishmentKind::Ban))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReviewErr(ReviewError::Validation(_)))
    ));

    Ok(())
}
