//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Review instances are additionally reachable through the [`review::ReviewStore`] trait
//! so the workflow can run against an in-memory store in tests.

pub mod player;
pub mod punishment;
pub mod review;
pub mod server_setting;
pub mod staff_warning;
