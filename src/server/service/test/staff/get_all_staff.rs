use super::*;

/// Tests the staff roster.
///
/// Expected: only moderators and senior moderators, ordered by username
#[tokio::test]
async fn lists_moderators_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_player_with_rank(db, "Zed", "mod").await?;
    factory::create_player_with_rank(db, "Amy", "srmod").await?;
    factory::create_player_with_rank(db, "Boss", "owner").await?;
    factory::create_player_with_rank(db, "Steve", "default").await?;

    let sync = game_sync();
    let staff = StaffService::new(db, &sync).get_all_staff().await?;

    let names: Vec<_> = staff.iter().map(|p| p.username.as_str()).collect();
    assert_eq!(names, vec!["Amy", "Zed"]);

    Ok(())
}
