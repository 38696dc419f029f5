//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a player together with an active ban and a pending appeal against it.
///
/// # Returns
/// - `Ok((player, punishment, appeal))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_appeal_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::player::Model,
        entity::punishment::Model,
        entity::review::Model,
    ),
    DbErr,
> {
    let player = crate::factory::player::create_player(db).await?;
    let punishment = crate::factory::punishment::create_ban(db, &player.uuid).await?;
    let appeal = crate::factory::review::ReviewFactory::appeal(db, &player.username, punishment.id)
        .build()
        .await?;

    Ok((player, punishment, appeal))
}
