//! Role names stored in the `users.role` column and embedded in JWT claims.

/// Practice curators and administrators.
pub const ROLE_STAFF: &str = "staff";

/// Thesis authors.
pub const ROLE_STUDENT: &str = "student";
