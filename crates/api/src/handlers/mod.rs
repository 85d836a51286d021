//! HTTP request handlers, one module per resource.

pub mod archive;
pub mod auth;
pub mod catalog;
pub mod export;
pub mod materials;
pub mod notification;
pub mod thesis;
