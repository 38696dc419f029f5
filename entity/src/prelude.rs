pub use super::player::Entity as Player;
pub use super::punishment::Entity as Punishment;
pub use super::review::Entity as Review;
pub use super::server_setting::Entity as ServerSetting;
pub use super::staff_warning::Entity as StaffWarning;
