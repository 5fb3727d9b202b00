mod models;
mod handlers;
mod services;
mod middleware;
mod payroll;
mod config;
mod errors;

use std::io::{self, BufRead, Write};
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use crate::{
    config::Config,
    errors::AppError,
    handlers::Console,
    models::{AuthenticatedSession, Role},
    services::{Bootstrap, CredentialStore, FileStorage, LineStorage, TimeRecordStore},
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = Config::load().context("Failed to load configuration")?;

    let credential_store = CredentialStore::new(FileStorage::new(&config.storage.credentials_path));
    let bootstrap = credential_store
        .ensure_defaults()
        .context("Failed to create default users")?;
    let credential_set = credential_store
        .load()
        .context("Failed to load user login data")?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    if bootstrap == Bootstrap::Created {
        console.say("Default users added.")?;
    }
    if credential_set.storage_absent {
        console.say("No user login data found. Please set up login data first.")?;
    }
    for skipped in &credential_set.skipped {
        console.say(format!("Skipped malformed login record: {}", skipped))?;
    }

    console.say("\n--- Login ---")?;
    let session = match handlers::login(&mut console, &credential_set.credentials) {
        Ok(Some(session)) => session,
        Ok(None) => {
            console.say("Exiting due to failed login.")?;
            return Ok(());
        }
        Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    if session.role == Role::User {
        console.say("Note: As a 'User', you can only generate payroll reports.")?;
    }

    let payroll_store = TimeRecordStore::new(FileStorage::new(&config.storage.payroll_path));
    match run_menu(&mut console, &session, &payroll_store) {
        Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
        other => other.context("Payroll session failed"),
    }
}

fn run_menu<R: BufRead, W: Write, S: LineStorage>(
    console: &mut Console<R, W>,
    session: &AuthenticatedSession,
    payroll_store: &TimeRecordStore<S>,
) -> Result<(), AppError> {
    loop {
        console.say("\n1. Enter Employee Data")?;
        console.say("2. Generate Payroll Report")?;
        console.say("3. Exit")?;

        match console.prompt("Choose an option: ")?.trim() {
            "1" => match middleware::require_admin(session) {
                Ok(()) => {
                    let saved = handlers::collect_employee_data(console, payroll_store)?;
                    tracing::debug!("Stored {} employee records", saved);
                }
                Err(AppError::AuthDenied(msg)) => console.say(format!("Access Denied: {}", msg))?,
                Err(e) => return Err(e),
            },
            "2" => {
                console.say(format!(
                    "\nLogged in as: {}, Authorization: {}",
                    session.id, session.role
                ))?;
                handlers::generate_report(console, payroll_store)?;
            }
            "3" => {
                console.say("Exiting the program.")?;
                return Ok(());
            }
            _ => console.say("Invalid option. Please try again.")?,
        }
    }
}
