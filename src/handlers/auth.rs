use std::io::{BufRead, Write};
use crate::errors::{AppResult, AuthError};
use crate::models::{AuthenticatedSession, UserCredential};
use crate::services::authenticate;
use super::console::Console;

/// Prompts for an id and password. One attempt; `None` when refused.
pub fn login<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    credentials: &[UserCredential],
) -> AppResult<Option<AuthenticatedSession>> {
    let id = console.prompt("Enter User ID: ")?.trim().to_string();
    let secret = console.prompt("Enter Password: ")?.trim().to_string();

    match authenticate(credentials, &id, &secret) {
        Ok(session) => {
            console.say(format!("Login successful! Welcome, {}.", session.id))?;
            Ok(Some(session))
        }
        Err(AuthError::InvalidSecret(_)) => {
            console.say("Invalid password. Access denied.")?;
            Ok(None)
        }
        Err(AuthError::UnknownId(_)) => {
            console.say("User ID not found. Access denied.")?;
            Ok(None)
        }
    }
}
