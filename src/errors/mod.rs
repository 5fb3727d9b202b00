// Error kinds for the payroll core, built on thiserror.
use thiserror::Error;

pub mod auth;
pub mod line;

// Re-export commonly used types
pub use auth::AuthError;
pub use line::LineError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No data found at {0}")]
    StorageAbsent(String),

    // The #[from] attribute lets `?` lift a LineError raised while parsing a stored line.
    #[error("Malformed line: {0}")]
    MalformedLine(#[from] LineError),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Access denied: {0}")]
    AuthDenied(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;
