//! Staff and permission ranks.
//!
//! Ranks are stored as lowercase permission-group names. The declaration order of
//! [`Rank`] is the hierarchy, so the derived `Ord` is the rank comparison used
//! everywhere else.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Default,
    Mod,
    SrMod,
    Admin,
    HeadAdmin,
    Manager,
    Owner,
}

impl Rank {
    /// Every rank from lowest to highest.
    pub const ALL: [Rank; 7] = [
        Rank::Default,
        Rank::Mod,
        Rank::SrMod,
        Rank::Admin,
        Rank::HeadAdmin,
        Rank::Manager,
        Rank::Owner,
    ];

    /// Every staff rank from lowest to highest.
    pub const STAFF: [Rank; 6] = [
        Rank::Mod,
        Rank::SrMod,
        Rank::Admin,
        Rank::HeadAdmin,
        Rank::Manager,
        Rank::Owner,
    ];

    /// Ranks an admin may hand out directly with set-rank.
    pub const ASSIGNABLE: [Rank; 5] = [
        Rank::Mod,
        Rank::SrMod,
        Rank::Admin,
        Rank::HeadAdmin,
        Rank::Manager,
    ];

    /// Parses a permission-group name strictly.
    ///
    /// # Returns
    /// - `Some(Rank)` - Name matched one of the known groups (case-insensitive)
    /// - `None` - Unknown group name
    pub fn parse(group: &str) -> Option<Self> {
        match group.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Rank::Default),
            "mod" => Some(Rank::Mod),
            "srmod" => Some(Rank::SrMod),
            "admin" => Some(Rank::Admin),
            "headadmin" => Some(Rank::HeadAdmin),
            "manager" => Some(Rank::Manager),
            "owner" => Some(Rank::Owner),
            _ => None,
        }
    }

    /// Parses a stored permission-group name, treating unknown groups as `Default`.
    ///
    /// Unknown groups carry no privileges, so a typo in the permission store can never
    /// grant access.
    pub fn from_group(group: &str) -> Self {
        Self::parse(group).unwrap_or(Rank::Default)
    }

    /// Position in the hierarchy, `default = 0` through `owner = 6`.
    pub fn order(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rank::Default => "default",
            Rank::Mod => "mod",
            Rank::SrMod => "srmod",
            Rank::Admin => "admin",
            Rank::HeadAdmin => "headadmin",
            Rank::Manager => "manager",
            Rank::Owner => "owner",
        }
    }

    pub fn is_staff(self) -> bool {
        self >= Rank::Mod
    }

    pub fn is_senior_staff(self) -> bool {
        self >= Rank::SrMod
    }

    pub fn is_admin(self) -> bool {
        self >= Rank::Admin
    }

    pub fn is_assignable(self) -> bool {
        Self::ASSIGNABLE.contains(&self)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
