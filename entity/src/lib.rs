//! SeaORM entity definitions for the community panel database.

pub mod prelude;

pub mod player;
pub mod punishment;
pub mod review;
pub mod server_setting;
pub mod staff_warning;
