//! Domain models and operation-specific parameter types.
//!
//! Models are built from SeaORM entities at the repository boundary and converted into
//! DTOs by controllers. Nothing in here touches the database directly.

pub mod player;
pub mod punishment;
pub mod review;
