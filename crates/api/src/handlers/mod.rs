//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers validate with `jobmanager_core`, delegate to the corresponding
//! repository in `jobmanager_db`, and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod clients;
pub mod notes;
pub mod projects;
pub mod stats;
