use crate::errors::{AppError, AppResult, LineError};
use crate::models::{Role, UserCredential};
use super::storage::LineStorage;

/// Seeded only when the credential store does not exist yet.
pub const DEFAULT_CREDENTIALS: [(&str, &str, Role); 2] = [
    ("admin1", "adminpass", Role::Admin),
    ("user1", "password123", Role::User),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bootstrap {
    Created,
    AlreadyExists,
}

/// Result of loading credentials. Malformed lines are skipped and listed in `skipped`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CredentialSet {
    pub credentials: Vec<UserCredential>,
    pub skipped: Vec<LineError>,
    pub storage_absent: bool,
}

pub struct CredentialStore<S> {
    storage: S,
}

impl<S: LineStorage> CredentialStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Creates the store with the default Admin and User if it is missing.
    pub fn ensure_defaults(&self) -> AppResult<Bootstrap> {
        let lines: Vec<String> = DEFAULT_CREDENTIALS
            .iter()
            .map(|(id, secret, role)| UserCredential::new(*id, *secret, *role).to_line())
            .collect();

        if self.storage.create_with(&lines)? {
            tracing::info!("Default users added to {}", self.storage.location());
            Ok(Bootstrap::Created)
        } else {
            tracing::debug!("Credential store {} already exists", self.storage.location());
            Ok(Bootstrap::AlreadyExists)
        }
    }

    /// Reads every credential line in order.
    ///
    /// A missing store yields an empty set flagged `storage_absent`.
    pub fn load(&self) -> AppResult<CredentialSet> {
        let lines = match self.storage.lines() {
            Ok(lines) => lines,
            Err(AppError::StorageAbsent(location)) => {
                tracing::warn!("No user login data found at {}", location);
                return Ok(CredentialSet {
                    storage_absent: true,
                    ..CredentialSet::default()
                });
            }
            Err(e) => return Err(e),
        };

        let mut set = CredentialSet::default();
        for (index, line) in lines.enumerate() {
            match UserCredential::parse_line(&line?, index + 1) {
                Ok(credential) => set.credentials.push(credential),
                Err(e) => {
                    tracing::warn!(line = e.line(), "Skipping credential {}", e);
                    set.skipped.push(e);
                }
            }
        }

        tracing::debug!(
            "Loaded {} credentials ({} skipped)",
            set.credentials.len(),
            set.skipped.len()
        );
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::{FileStorage, MemoryStorage};
    use tempfile::tempdir;

    #[test]
    fn test_ensure_defaults_seeds_two_users() {
        let store = CredentialStore::new(MemoryStorage::absent());
        assert_eq!(store.ensure_defaults().unwrap(), Bootstrap::Created);

        let set = store.load().unwrap();
        assert!(!set.storage_absent);
        assert!(set.skipped.is_empty());
        assert_eq!(
            set.credentials,
            vec![
                UserCredential::new("admin1", "adminpass", Role::Admin),
                UserCredential::new("user1", "password123", Role::User),
            ]
        );
    }

    #[test]
    fn test_ensure_defaults_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("user_data.txt");
        let store = CredentialStore::new(FileStorage::new(&path));

        assert_eq!(store.ensure_defaults().unwrap(), Bootstrap::Created);
        let before = std::fs::read_to_string(&path).unwrap();
        assert_eq!(before, "admin1|adminpass|Admin\nuser1|password123|User\n");

        assert_eq!(store.ensure_defaults().unwrap(), Bootstrap::AlreadyExists);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_ensure_defaults_keeps_existing_store() {
        let storage = MemoryStorage::with_lines(&["boss|secret|Admin"]);
        let store = CredentialStore::new(storage);
        assert_eq!(store.ensure_defaults().unwrap(), Bootstrap::AlreadyExists);
        assert_eq!(store.load().unwrap().credentials.len(), 1);
    }

    #[test]
    fn test_load_missing_store() {
        let store = CredentialStore::new(MemoryStorage::absent());
        let set = store.load().unwrap();
        assert!(set.storage_absent);
        assert!(set.credentials.is_empty());
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let storage = MemoryStorage::with_lines(&[
            "admin1|adminpass|Admin",
            "broken line",
            "ghost|boo|Superuser",
            "user1|password123|User",
        ]);
        let set = CredentialStore::new(storage).load().unwrap();

        let ids: Vec<&str> = set.credentials.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["admin1", "user1"]);
        assert_eq!(set.skipped.len(), 2);
        assert_eq!(set.skipped[0].line(), 2);
        assert!(matches!(set.skipped[1], LineError::UnknownRole { line: 3, .. }));
    }
}
