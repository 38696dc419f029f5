use super::*;

/// Tests the public staff roster.
///
/// Expected: every staff rank, highest rank first and by username within a rank;
/// regular players excluded
#[tokio::test]
async fn lists_staff_by_rank() -> Result<(), AppError> {
    let test = TestBuilder::new().with_staff_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_player_with_rank(db, "Zed", "mod").await?;
    factory::create_player_with_rank(db, "Amy", "mod").await?;
    factory::create_player_with_rank(db, "Boss", "owner").await?;
    factory::create_player_with_rank(db, "Sam", "srmod").await?;
    factory::create_player_with_rank(db, "Hana", "headadmin").await?;
    factory::create_player_with_rank(db, "Steve", "default").await?;

    let roster = PlayerService::new(db).get_roster().await?;

    let names: Vec<_> = roster.iter().map(|p| p.username.as_str()).collect();
    assert_eq!(names, vec!["Boss", "Hana", "Sam", "Amy", "Zed"]);

    Ok(())
}
