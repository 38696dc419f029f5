//! Who may change whose rank.

use crate::model::rank::Rank;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankChange {
    Promote,
    Demote,
}

/// Decides whether `actor` may move `target` to `new_rank`.
///
/// - Promote: the actor must outrank the target and be at least as high as the new rank.
/// - Demote: the actor must outrank the target. The new rank is not checked, so a
///   demotion may name a rank above the actor's own.
///
/// Callers parse stored group names with [`Rank::from_group`] first, so unknown groups
/// arrive here as `Rank::Default`.
pub fn can_change_rank(actor: Rank, target: Rank, new_rank: Rank, direction: RankChange) -> bool {
    match direction {
        RankChange::Promote => actor > target && actor >= new_rank,
        RankChange::Demote => actor > target,
    }
}
