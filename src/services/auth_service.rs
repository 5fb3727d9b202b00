use crate::errors::auth::{AuthError, AuthResult};
use crate::models::{AuthenticatedSession, UserCredential};

/// Checks an id and secret against loaded credentials.
///
/// The first credential with a matching id decides the outcome, even when
/// the store holds duplicates. There is no lockout or retry counting.
pub fn authenticate(
    credentials: &[UserCredential],
    id: &str,
    secret: &str,
) -> AuthResult<AuthenticatedSession> {
    let credential = credentials
        .iter()
        .find(|credential| credential.id == id)
        .ok_or_else(|| {
            tracing::info!("User not found: {}", id);
            AuthError::UnknownId(id.to_string())
        })?;

    if credential.secret != secret {
        tracing::info!("Invalid password for user: {}", id);
        return Err(AuthError::InvalidSecret(id.to_string()));
    }

    tracing::info!("Login successful for user: {} ({})", id, credential.role);
    Ok(AuthenticatedSession::from(credential))
}
