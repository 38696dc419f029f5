use super::*;
use std::sync::Arc;
use test_utils::builder::TestBuilder;
use tokio::task::JoinSet;

use crate::server::data::review::ReviewRepository;

/// Tests submitting a valid report.
///
/// Expected: Ok with a pending instance and exactly one notification linking to it
#[tokio::test]
async fn stores_pending_instance_and_notifies() -> Result<(), ReviewError> {
    let store = InMemoryReviewStore::new();
    let notifier = RecordingNotifier::default();
    let workflow = ReviewWorkflow::new(&store, &notifier, APP_URL);

    let instance = workflow.submit("Steve", report_payload()).await?;

    assert_eq!(instance.status, ReviewStatus::Pending);
    assert_eq!(instance.category, ReviewCategory::Report);

    let events = notifier.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, instance.id);
    assert_eq!(
        events[0].link,
        format!("{}/staff/admin-reports/{}", APP_URL, instance.id)
    );

    Ok(())
}

/// Tests that an invalid form is rejected before anything is stored.
///
/// Expected: Err(ReviewError::Validation), no instance, no notification
#[tokio::test]
async fn rejects_invalid_payload() -> Result<(), ReviewError> {
    let store = InMemoryReviewStore::new();
    let notifier = RecordingNotifier::default();
    let workflow = ReviewWorkflow::new(&store, &notifier, APP_URL);

    let mut form = application_form();
    form.motivation = "x".repeat(501);

    let result = workflow
        .submit("Steve", ReviewPayload::ModApplication(form))
        .await;

    assert!(matches!(result, Err(ReviewError::Validation(_))));
    assert!(store
        .list_by_status(ReviewCategory::ModApplication, &ReviewStatus::OPEN)
        .await?
        .is_empty());
    assert!(notifier.events().is_empty());

    Ok(())
}

/// Tests that a second open instance for the same subject and category is refused.
///
/// Expected: Err(ReviewError::DuplicatePending) while the first is pending or claimed
#[tokio::test]
async fn rejects_duplicate_open_instance() -> Result<(), ReviewError> {
    let store = InMemoryReviewStore::new();
    let notifier = RecordingNotifier::default();
    let workflow = ReviewWorkflow::new(&store, &notifier, APP_URL);

    let first = workflow.submit("Steve", appeal_payload(1)).await?;

    let result = workflow.submit("Steve", appeal_payload(2)).await;
    assert!(matches!(result, Err(ReviewError::DuplicatePending { .. })));

    workflow
        .claim(ReviewCategory::Appeal, first.id, "Alex")
        .await?;
    let result = workflow.submit("Steve", appeal_payload(2)).await;
    assert!(matches!(result, Err(ReviewError::DuplicatePending { .. })));

    Ok(())
}

/// Tests that open instances only block their own category and subject.
///
/// Expected: Ok for a report while an appeal is open, and for another subject
#[tokio::test]
async fn duplicates_are_per_category_and_subject() -> Result<(), ReviewError> {
    let store = InMemoryReviewStore::new();
    let notifier = RecordingNotifier::default();
    let workflow = ReviewWorkflow::new(&store, &notifier, APP_URL);

    workflow.submit("Steve", appeal_payload(1)).await?;

    assert!(workflow.submit("Steve", report_payload()).await.is_ok());
    assert!(workflow.submit("Alex", appeal_payload(2)).await.is_ok());

    Ok(())
}

/// Tests that a failing notifier does not undo the submission.
///
/// Expected: Ok and the instance is stored
#[tokio::test]
async fn notification_failure_is_swallowed() -> Result<(), ReviewError> {
    let store = InMemoryReviewStore::new();
    let workflow = ReviewWorkflow::new(&store, &FailingNotifier, APP_URL);

    let instance = workflow.submit("Steve", report_payload()).await?;

    assert!(store
        .get_instance(ReviewCategory::Report, instance.id)
        .await?
        .is_some());

    Ok(())
}

/// Tests one player submitting the same application many times at once against SQLite.
///
/// Expected: exactly one Ok, every other attempt Err(ReviewError::DuplicatePending), one
/// open row and one notification
#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_submissions_leave_one_open_instance() -> Result<(), ReviewError> {
    let test = TestBuilder::new()
        .with_review_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();
    let notifier = Arc::new(RecordingNotifier::default());

    let mut tasks = JoinSet::new();
    for _ in 0..16 {
        let db = db.clone();
        let notifier = notifier.clone();
        tasks.spawn(async move {
            let store = ReviewRepository::new(&db);
            ReviewWorkflow::new(&store, notifier.as_ref(), APP_URL)
                .submit(
                    "Steve",
                    ReviewPayload::ModApplication(application_form()),
                )
                .await
        });
    }

    let mut accepted = 0;
    let mut duplicates = 0;
    while let Some(joined) = tasks.join_next().await {
        match joined.unwrap() {
            Ok(_) => accepted += 1,
            Err(ReviewError::DuplicatePending { .. }) => duplicates += 1,
            Err(err) => return Err(err),
        }
    }

    assert_eq!(accepted, 1);
    assert_eq!(duplicates, 15);

    let open = ReviewRepository::new(&db)
        .list_by_status(ReviewCategory::ModApplication, &ReviewStatus::OPEN)
        .await?;
    assert_eq!(open.len(), 1);
    assert_eq!(notifier.events().len(), 1);

    Ok(())
}
