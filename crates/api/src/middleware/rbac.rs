//! Role-based access control extractors.
//!
//! Wraps [`AuthUser`] and rejects requests whose role does not meet the
//! requirement, so authorization is enforced at the type level before the
//! handler body runs.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use praktika_core::error::CoreError;
use praktika_core::roles::ROLE_STAFF;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `staff` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn staff_only(RequireStaff(user): RequireStaff) -> AppResult<Json<()>> {
///     // user is guaranteed to be staff here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireStaff(pub AuthUser);

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_STAFF {
            return Err(AppError::Core(CoreError::Forbidden(
                "Staff role required".into(),
            )));
        }
        Ok(RequireStaff(user))
    }
}
