//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and
//! `create_*` convenience functions for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let player = factory::player::PlayerFactory::new(db)
//!     .username("Steve")
//!     .rank("srmod")
//!     .build()
//!     .await?;
//!
//! let appeal = factory::review::ReviewFactory::appeal(db, &player.username, punishment.id)
//!     .status("claimed")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `player` - Create player entities
//! - `punishment` - Create ban and mute entities
//! - `review` - Create application, appeal and report entities
//! - `helpers` - Shared counters and multi-entity helpers

pub mod helpers;
pub mod player;
pub mod punishment;
pub mod review;

pub use player::{create_player, create_player_with_rank};
pub use punishment::create_ban;
pub use review::create_application;
