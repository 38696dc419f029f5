use super::*;

/// Tests updating a player's rank.
///
/// Expected: Ok(true) and the stored group is the new rank's name
#[tokio::test]
async fn updates_rank() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::create_player_with_rank(db, "Steve", "mod").await?;

    let repo = PlayerRepository::new(db);
    let updated = repo.set_rank("Steve", Rank::HeadAdmin).await?;

    assert!(updated);
    let player = repo.find_by_username("Steve").await?.unwrap();
    assert_eq!(player.rank, Rank::HeadAdmin);

    Ok(())
}

/// Tests updating a player that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = PlayerRepository::new(db)
        .set_rank("Nobody", Rank::Mod)
        .await?;

    assert!(!updated);

    Ok(())
}
