//! Data transfer objects shared by the HTTP surface.
//!
//! Everything here is serializable and documented for the OpenAPI schema. Server-only
//! domain types live under `server::model`.

pub mod api;
pub mod punishment;
pub mod rank;
pub mod review;
pub mod staff;
