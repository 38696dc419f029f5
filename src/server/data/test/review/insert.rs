use super::*;
use sea_orm::{ActiveModelTrait, ActiveValue};

/// Tests inserting a new application.
///
/// Verifies the row is stored pending, unclaimed, with a payload that decodes back into
/// the submitted form.
///
/// Expected: Ok with a pending instance equal to what was submitted
#[tokio::test]
async fn inserts_pending_instance() -> Result<(), ReviewError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    let instance = repo
        .insert(NewReviewInstance {
            subject: "Steve".to_string(),
            payload: application_payload(),
            created_at: Utc::now(),
        })
        .await?;

    assert_eq!(instance.category, ReviewCategory::ModApplication);
    assert_eq!(instance.status, ReviewStatus::Pending);
    assert!(instance.claimed_by.is_none());

    let stored = repo
        .get_instance(ReviewCategory::ModApplication, instance.id)
        .await?
        .unwrap();
    assert_eq!(stored.payload, application_payload());

    Ok(())
}

/// Tests that an instance is not visible through another category.
///
/// Expected: Ok(None)
#[tokio::test]
async fn get_instance_is_scoped_to_category() -> Result<(), ReviewError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let review = factory::review::create_application(db, "Steve").await?;

    let found = ReviewRepository::new(db)
        .get_instance(ReviewCategory::Report, review.id)
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that a row whose payload no longer decodes is reported, not silently dropped.
///
/// Expected: Err(ReviewError::Internal)
#[tokio::test]
async fn malformed_payload_is_internal_error() -> Result<(), ReviewError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let review = factory::review::ReviewFactory::report(db, "Steve", "Griefer")
        .build()
        .await?;

    let result = ReviewRepository::new(db)
        .get_instance(ReviewCategory::Report, review.id)
        .await;
    assert!(result.is_ok());

    entity::review::ActiveModel {
        id: ActiveValue::Unchanged(review.id),
        payload: ActiveValue::Set("{\"unexpected\": true}".to_string()),
        ..Default::default()
    }
    .update(db)
    .await?;

    let result = ReviewRepository::new(db)
        .get_instance(ReviewCategory::Report, review.id)
        .await;
    assert!(matches!(result, Err(ReviewError::Internal(_))));

    Ok(())
}

/// Tests inserting while the subject already has an open instance in the category.
///
/// Verifies nothing is written while the first instance is pending or in review, and that
/// a decided instance no longer blocks.
///
/// Expected: Err(ReviewError::DuplicatePending) until the first instance is decided
#[tokio::test]
async fn refuses_second_open_instance() -> Result<(), ReviewError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    let new_application = || NewReviewInstance {
        subject: "Steve".to_string(),
        payload: application_payload(),
        created_at: Utc::now(),
    };

    let first = repo.insert(new_application()).await?;

    let result = repo.insert(new_application()).await;
    assert!(matches!(
        result,
        Err(ReviewError::DuplicatePending {
            category: ReviewCategory::ModApplication,
            ..
        })
    ));

    repo.compare_and_set_status(
        ReviewCategory::ModApplication,
        first.id,
        &[ReviewStatus::Pending],
        &claim("Alex"),
    )
    .await?;
    assert!(matches!(
        repo.insert(new_application()).await,
        Err(ReviewError::DuplicatePending { .. })
    ));

    repo.compare_and_set_status(
        ReviewCategory::ModApplication,
        first.id,
        &ReviewStatus::OPEN,
        &decide(ReviewStatus::Denied, "Alex", None),
    )
    .await?;
    let second = repo.insert(new_application()).await?;
    assert_ne!(second.id, first.id);

    let all = repo
        .list_by_status(
            ReviewCategory::ModApplication,
            &[ReviewStatus::Pending, ReviewStatus::Denied],
        )
        .await?;
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests that an open instance of another subject does not block an insert.
///
/// Expected: Ok for both subjects
#[tokio::test]
async fn open_instance_blocks_only_its_subject() -> Result<(), ReviewError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::review::create_application(db, "Steve").await?;

    let instance = ReviewRepository::new(db)
        .insert(NewReviewInstance {
            subject: "Alex".to_string(),
            payload: application_payload(),
            created_at: Utc::now(),
        })
        .await?;

    assert_eq!(instance.subject, "Alex");

    Ok(())
}
