//! Domain types and business rules for the job manager.
//!
//! This crate is pure logic: entity enumerations, field validation, and the
//! payment-completion guard. It performs no I/O and knows nothing about
//! HTTP or the database; those layers live in `jobmanager-api` and
//! `jobmanager-db` respectively.

pub mod client;
pub mod error;
pub mod note;
pub mod project;
pub mod types;
