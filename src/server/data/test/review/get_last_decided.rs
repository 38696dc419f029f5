use super::*;

/// Tests that the most recently handled decision is returned.
///
/// Expected: Ok(Some) with the later of two decided applications
#[tokio::test]
async fn returns_latest_decision() -> Result<(), ReviewError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::review::ReviewFactory::application(db, "Steve")
        .status("denied")
        .handled("Alex", "No", now - Duration::days(60))
        .build()
        .await?;
    let latest = factory::review::ReviewFactory::application(db, "Steve")
        .status("denied")
        .handled("Alex", "Still no", now - Duration::days(5))
        .build()
        .await?;
    factory::review::create_application(db, "Steve").await?;

    let last = ReviewRepository::new(db)
        .get_last_decided(ReviewCategory::ModApplication, "Steve")
        .await?
        .unwrap();

    assert_eq!(last.id, latest.id);
    assert_eq!(last.status, ReviewStatus::Denied);

    Ok(())
}

/// Tests a subject with only open instances.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_open_instances() -> Result<(), ReviewError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::review::create_application(db, "Steve").await?;

    let last = ReviewRepository::new(db)
        .get_last_decided(ReviewCategory::ModApplication, "Steve")
        .await?;

    assert!(last.is_none());

    Ok(())
}
