use thiserror::Error;

/// Why a login attempt was refused. Both outcomes end the attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User ID not found: {0}")]
    UnknownId(String),

    #[error("Invalid password for user: {0}")]
    InvalidSecret(String),
}

pub type AuthResult<T> = Result<T, AuthError>;
