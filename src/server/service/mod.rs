//! Business logic layer.
//!
//! Services orchestrate repositories and external collaborators and work with domain
//! models rather than DTOs. The two decision-making pieces are [`rank_policy`], a pure
//! function over ranks, and [`review::ReviewWorkflow`], the shared lifecycle of
//! applications, appeals and reports.

pub mod application;
pub mod game_sync;
pub mod notification;
pub mod player;
pub mod punishment;
pub mod rank_policy;
pub mod review;
pub mod staff;
pub mod submission;
