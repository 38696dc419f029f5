use super::*;

/// Tests listing one subject's history in a category.
///
/// Expected: every status of the subject's instances, newest first, other subjects and
/// categories excluded
#[tokio::test]
async fn lists_subject_history_newest_first() -> Result<(), ReviewError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let denied = factory::review::ReviewFactory::application(db, "Steve")
        .status("denied")
        .handled("Alex", "Not yet", now - Duration::days(40))
        .created_at(now - Duration::days(41))
        .build()
        .await?;
    let pending = factory::review::ReviewFactory::application(db, "Steve")
        .build()
        .await?;
    factory::review::ReviewFactory::application(db, "Alex")
        .build()
        .await?;
    factory::review::ReviewFactory::report(db, "Steve", "Griefer")
        .build()
        .await?;

    let history = ReviewRepository::new(db)
        .list_for_subject(ReviewCategory::ModApplication, "Steve")
        .await?;

    let ids: Vec<_> = history.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![pending.id, denied.id]);
    assert_eq!(history[1].status, ReviewStatus::Denied);
    assert_eq!(history[1].response.as_deref(), Some("Not yet"));

    Ok(())
}

/// Tests listing a subject with no instances.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_for_unknown_subject() -> Result<(), ReviewError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::review::create_application(db, "Steve").await?;

    let history = ReviewRepository::new(db)
        .list_for_subject(ReviewCategory::ModApplication, "Notch")
        .await?;

    assert!(history.is_empty());

    Ok(())
}
