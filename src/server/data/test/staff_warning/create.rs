use super::*;

/// Tests recording warnings and reading them back newest first.
///
/// Expected: Ok with both warnings, the second one first
#[tokio::test]
async fn creates_and_lists_warnings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_staff_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::create_player_with_rank(db, "Steve", "mod").await?;

    let repo = StaffWarningRepository::new(db);
    let first = repo
        .create(CreateStaffWarningParam {
            username: "Steve".to_string(),
            reason: "Late to meeting".to_string(),
            issued_by: "Alex".to_string(),
        })
        .await?;
    let second = repo
        .create(CreateStaffWarningParam {
            username: "Steve".to_string(),
            reason: "Abusing vanish".to_string(),
            issued_by: "Alex".to_string(),
        })
        .await?;

    assert_eq!(first.issued_by, "Alex");

    let warnings = repo.get_by_username("Steve").await?;
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].id, second.id);

    Ok(())
}
