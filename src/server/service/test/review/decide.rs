use super::*;

/// Tests denying a claimed application with a response.
///
/// Expected: Ok with status denied, handled_by recorded, claimed_by cleared
#[tokio::test]
async fn records_outcome_and_clears_claim() -> Result<(), ReviewError> {
    let store = InMemoryReviewStore::new();
    let notifier = RecordingNotifier::default();
    let workflow = ReviewWorkflow::new(&store, &notifier, APP_URL);

    let instance = workflow
        .submit("Steve", ReviewPayload::ModApplication(application_form()))
        .await?;
    workflow
        .claim(ReviewCategory::ModApplication, instance.id, "Alex")
        .await?;

    let decided = workflow
        .decide(
            ReviewCategory::ModApplication,
            instance.id,
            "Sam",
            Outcome::Deny,
            Some("  Not enough experience  ".to_string()),
        )
        .await?;

    assert_eq!(decided.status, ReviewStatus::Denied);
    assert_eq!(decided.status_label(), "denied");
    assert_eq!(decided.handled_by.as_deref(), Some("Sam"));
    assert_eq!(decided.response.as_deref(), Some("Not enough experience"));
    assert!(decided.claimed_by.is_none());
    assert!(decided.handled_at.is_some());

    Ok(())
}

/// Tests deciding a pending instance that nobody claimed.
///
/// Expected: Ok, blank response stored as none
#[tokio::test]
async fn decides_unclaimed_instance() -> Result<(), ReviewError> {
    let store = InMemoryReviewStore::new();
    let notifier = RecordingNotifier::default();
    let workflow = ReviewWorkflow::new(&store, &notifier, APP_URL);

    let instance = workflow.submit("Steve", report_payload()).await?;
    let decided = workflow
        .decide(
            ReviewCategory::Report,
            instance.id,
            "Alex",
            Outcome::Approve,
            Some("   ".to_string()),
        )
        .await?;

    assert_eq!(decided.status_label(), "closed");
    assert!(decided.response.is_none());

    Ok(())
}

/// Tests deciding an instance a second time.
///
/// Expected: Err(ReviewError::AlreadyDecided) and the stored instance is unchanged
#[tokio::test]
async fn terminal_instance_is_not_mutated() -> Result<(), ReviewError> {
    let store = InMemoryReviewStore::new();
    let notifier = RecordingNotifier::default();
    let workflow = ReviewWorkflow::new(&store, &notifier, APP_URL);

    let instance = workflow.submit("Steve", report_payload()).await?;
    let first = workflow
        .decide(
            ReviewCategory::Report,
            instance.id,
            "Alex",
            Outcome::Deny,
            Some("No evidence".to_string()),
        )
        .await?;

    let result = workflow
        .decide(
            ReviewCategory::Report,
            instance.id,
            "Sam",
            Outcome::Approve,
            Some("Changed my mind".to_string()),
        )
        .await;

    assert!(matches!(
        result,
        Err(ReviewError::AlreadyDecided { ref status, .. }) if status == "denied"
    ));
    assert_eq!(workflow.get(ReviewCategory::Report, instance.id).await?, first);

    Ok(())
}

/// Tests deciding an id that does not exist.
///
/// Expected: Err(ReviewError::NotFound)
#[tokio::test]
async fn unknown_id_is_not_found() -> Result<(), ReviewError> {
    let store = InMemoryReviewStore::new();
    let notifier = RecordingNotifier::default();
    let workflow = ReviewWorkflow::new(&store, &notifier, APP_URL);

    let result = workflow
        .decide(ReviewCategory::Report, 5, "Alex", Outcome::Deny, None)
        .await;

    assert!(matches!(result, Err(ReviewError::NotFound { id: 5, .. })));

    Ok(())
}

/// Tests accepting an appeal.
///
/// Expected: Ok with status accepted and the linked punishment expired
#[tokio::test]
async fn accepting_appeal_releases_punishment() -> Result<(), ReviewError> {
    let store = InMemoryReviewStore::new();
    store.add_punishment(12, 0);
    let notifier = RecordingNotifier::default();
    let workflow = ReviewWorkflow::new(&store, &notifier, APP_URL);

    let instance = workflow.submit("Steve", appeal_payload(12)).await?;
    let decided = workflow
        .decide(ReviewCategory::Appeal, instance.id, "Alex", Outcome::Approve, None)
        .await?;

    assert_eq!(decided.status_label(), "accepted");
    assert_eq!(store.punishment_expiry(12), Some(1));

    Ok(())
}

/// Tests denying an appeal.
///
/// Expected: Ok and the punishment keeps its expiry
#[tokio::test]
async fn denying_appeal_keeps_punishment() -> Result<(), ReviewError> {
    let store = InMemoryReviewStore::new();
    store.add_punishment(12, 0);
    let notifier = RecordingNotifier::default();
    let workflow = ReviewWorkflow::new(&store, &notifier, APP_URL);

    let instance = workflow.submit("Steve", appeal_payload(12)).await?;
    workflow
        .decide(ReviewCategory::Appeal, instance.id, "Alex", Outcome::Deny, None)
        .await?;

    assert_eq!(store.punishment_expiry(12), Some(0));

    Ok(())
}

/// Tests accepting an appeal when releasing the punishment fails.
///
/// Expected: Err(ReviewError::Storage), the appeal stays claimed by the same staff member
/// and the punishment keeps its expiry
#[tokio::test]
async fn failed_release_leaves_appeal_unchanged() -> Result<(), ReviewError> {
    let store = InMemoryReviewStore::new();
    store.add_punishment(12, 0);
    let notifier = RecordingNotifier::default();
    let workflow = ReviewWorkflow::new(&store, &notifier, APP_URL);

    let instance = workflow.submit("Steve", appeal_payload(12)).await?;
    let claimed = workflow
        .claim(ReviewCategory::Appeal, instance.id, "Alex")
        .await?;

    store.fail_punishment_release(true);
    let result = workflow
        .decide(ReviewCategory::Appeal, instance.id, "Alex", Outcome::Approve, None)
        .await;

    assert!(matches!(result, Err(ReviewError::Storage(_))));
    assert_eq!(workflow.get(ReviewCategory::Appeal, instance.id).await?, claimed);
    assert_eq!(store.punishment_expiry(12), Some(0));

    store.fail_punishment_release(false);
    let decided = workflow
        .decide(ReviewCategory::Appeal, instance.id, "Alex", Outcome::Approve, None)
        .await?;
    assert_eq!(decided.status, ReviewStatus::Approved);
    assert_eq!(store.punishment_expiry(12), Some(1));

    Ok(())
}
