use super::*;

/// Tests submitting an application while applications are open.
///
/// Expected: Ok with a pending application and one notification
#[tokio::test]
async fn stores_application() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    open_applications(db).await?;
    let steve = player(db, "Steve", "default").await?;

    let notifier = RecordingNotifier::default();
    let instance = ApplicationService::new(db, &notifier, APP_URL)
        .submit(&steve, application_form())
        .await?;

    assert_eq!(instance.category, ReviewCategory::ModApplication);
    assert_eq!(instance.status, ReviewStatus::Pending);
    assert_eq!(instance.subject, "Steve");
    assert_eq!(notifier.events().len(), 1);

    Ok(())
}

/// Tests submitting while applications are closed.
///
/// Expected: Err(ReviewError::ApplicationsClosed) and no notification
#[tokio::test]
async fn rejects_when_closed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let steve = player(db, "Steve", "default").await?;

    let notifier = RecordingNotifier::default();
    let result = ApplicationService::new(db, &notifier, APP_URL)
        .submit(&steve, application_form())
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReviewErr(ReviewError::ApplicationsClosed))
    ));
    assert!(notifier.events().is_empty());

    Ok(())
}

/// Tests submitting as a staff member.
///
/// Expected: Err(ReviewError::AlreadyStaff)
#[tokio::test]
async fn rejects_staff() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    open_applications(db).await?;
    let alex = player(db, "Alex", "srmod").await?;

    let notifier = RecordingNotifier::default();
    let result = ApplicationService::new(db, &notifier, APP_URL)
        .submit(&alex, application_form())
        .await;

    assert!(matches!(
        result,
        Err(AppError::ReviewErr(ReviewError::AlreadyStaff(_)))
    ));

    Ok(())
}

/// Tests submitting within the cooldown after a denial.
///
/// Expected: Err(ReviewError::ReapplyCooldown) with the eligibility date thirty days after
/// the denial
#[tokio::test]
async fn rejects_within_cooldown() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    open_applications(db).await?;
    let steve = player(db, "Steve", "default").await?;
    let denied_at = Utc::now() - Duration::days(29);
    factory::review::ReviewFactory::application(db, "Steve")
        .status("denied")
        .handled("Sam", "Not yet", denied_at)
        .build()
        .await?;

    let notifier = RecordingNotifier::default();
    let result = ApplicationService::new(db, &notifier, APP_URL)
        .submit(&steve, application_form())
        .await;

    match result {
        Err(AppError::ReviewErr(ReviewError::ReapplyCooldown { eligible_at })) => {
            let expected = denied_at + Duration::days(30);
            assert!((eligible_at - expected).num_seconds().abs() <= 1);
        }
        _ => panic!("expected a reapply cooldown"),
    }

    Ok(())
}

/// Tests submitting a second application while the first is pending.
///
/// Expected: Err(ReviewError::DuplicatePending)
#[tokio::test]
async fn rejects_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_review_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    open_applications(db).await?;
    let steve = player(db, "Steve", "default").await?;

    let notifier = RecordingNotifier::default();
    let service = ApplicationService::new(db, &notifier, APP_URL);
    service.submit(&steve, application_form()).await?;

    let result = service.submit(&steve, application_form()).await;

    assert!(matches!(
        result,
        Err(AppError::ReviewErr(ReviewError::DuplicatePending { .. }))
    ));

    Ok(())
}
