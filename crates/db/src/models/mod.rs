//! Row models and DTOs, one module per entity.

pub mod archive;
pub mod catalog;
pub mod notification;
pub mod thesis;
pub mod user;
