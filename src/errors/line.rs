use thiserror::Error;

/// A stored line that could not be turned into a value. Line numbers are 1-based.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineError {
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: unknown role '{value}'")]
    UnknownRole { line: usize, value: String },

    #[error("line {line}: invalid date '{value}'")]
    InvalidDate { line: usize, value: String },

    #[error("line {line}: invalid {field} '{value}'")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: {field} '{value}' is out of range")]
    OutOfRange {
        line: usize,
        field: &'static str,
        value: String,
    },
}

impl LineError {
    pub fn line(&self) -> usize {
        match self {
            LineError::FieldCount { line, .. }
            | LineError::UnknownRole { line, .. }
            | LineError::InvalidDate { line, .. }
            | LineError::InvalidNumber { line, .. }
            | LineError::OutOfRange { line, .. } => *line,
        }
    }
}

pub type LineResult<T> = Result<T, LineError>;

/// Splits a stored line on `|` and checks the field count.
pub fn split_fields(raw: &str, line: usize, expected: usize) -> LineResult<Vec<&str>> {
    let fields: Vec<&str> = raw.trim().split('|').collect();
    if fields.len() != expected {
        return Err(LineError::FieldCount {
            line,
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}
