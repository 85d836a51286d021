//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod archive_repo;
pub mod catalog_repo;
pub mod notification_repo;
pub mod thesis_repo;
pub mod user_repo;

pub use archive_repo::ArchiveRepo;
pub use catalog_repo::CatalogRepo;
pub use notification_repo::NotificationRepo;
pub use thesis_repo::ThesisRepo;
pub use user_repo::UserRepo;
