use crate::errors::{AppError, AppResult};
use crate::models::AuthenticatedSession;

/// Gate for recording hours: only Admin sessions pass.
pub fn require_admin(session: &AuthenticatedSession) -> AppResult<()> {
    if session.role.can_record_hours() {
        return Ok(());
    }
    tracing::warn!("User {} ({}) denied employee data entry", session.id, session.role);
    Err(AppError::AuthDenied(
        "Only Admins can enter employee data.".into(),
    ))
}
