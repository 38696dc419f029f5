use super::*;

/// Tests filtering players by rank.
///
/// Verifies only players in the requested ranks are returned, ordered by username.
///
/// Expected: Ok with the two moderators in alphabetical order
#[tokio::test]
async fn returns_only_requested_ranks_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::create_player_with_rank(db, "Zed", "mod").await?;
    factory::player::create_player_with_rank(db, "Amy", "srmod").await?;
    factory::player::create_player_with_rank(db, "Boss", "admin").await?;
    factory::player::create_player(db).await?;

    let players = PlayerRepository::new(db)
        .get_by_ranks(&[Rank::Mod, Rank::SrMod])
        .await?;

    let names: Vec<_> = players.iter().map(|p| p.username.as_str()).collect();
    assert_eq!(names, vec!["Amy", "Zed"]);

    Ok(())
}
