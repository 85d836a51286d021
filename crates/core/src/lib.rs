//! Domain logic for the praktika practice & thesis administration backend.
//!
//! Everything in this crate is pure: validation, naming, the archival plan,
//! and notification text live here so the `db` and `api` crates stay thin.

pub mod archive;
pub mod error;
pub mod naming;
pub mod notify;
pub mod roles;
pub mod storage;
pub mod thesis;
pub mod types;
