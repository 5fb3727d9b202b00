use std::fmt;
use std::str::FromStr;
use crate::errors::line::{split_fields, LineError, LineResult};

pub const CREDENTIAL_FIELDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Only Admins may record hours; everyone can run reports.
    pub fn can_record_hours(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::User => write!(f, "User"),
        }
    }
}

// Stored roles are matched exactly; anything else is not a role.
impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "User" => Ok(Role::User),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredential {
    pub id: String,
    pub secret: String,
    pub role: Role,
}

impl UserCredential {
    pub fn new(id: impl Into<String>, secret: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            secret: secret.into(),
            role,
        }
    }

    /// Parses `id|secret|role`.
    pub fn parse_line(raw: &str, line: usize) -> LineResult<Self> {
        let fields = split_fields(raw, line, CREDENTIAL_FIELDS)?;
        let role = fields[2]
            .parse::<Role>()
            .map_err(|value| LineError::UnknownRole { line, value })?;
        Ok(Self::new(fields[0], fields[1], role))
    }

    pub fn to_line(&self) -> String {
        format!("{}|{}|{}", self.id, self.secret, self.role)
    }
}

/// Handle produced by a successful login; carries the role used for every later check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    pub id: String,
    pub secret: String,
    pub role: Role,
}

impl From<&UserCredential> for AuthenticatedSession {
    fn from(credential: &UserCredential) -> Self {
        Self {
            id: credential.id.clone(),
            secret: credential.secret.clone(),
            role: credential.role,
        }
    }
}
