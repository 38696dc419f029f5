//! HTTP request handlers.
//!
//! Controllers authenticate the caller with [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert DTOs to domain types, call into the service layer and convert the result back
//! to a DTO.

pub mod application;
pub mod auth;
pub mod player;
pub mod punishment;
pub mod review;
pub mod staff;
