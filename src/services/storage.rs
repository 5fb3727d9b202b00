//! Line-oriented storage behind the credential and payroll stores.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, ErrorKind, Write};
use std::path::PathBuf;
use crate::errors::{AppError, AppResult};

pub type Lines<'a> = Box<dyn Iterator<Item = io::Result<String>> + 'a>;

/// A newline-terminated text store.
pub trait LineStorage {
    /// Name used in diagnostics.
    fn location(&self) -> String;

    /// Creates the store holding `lines`. Returns `false` without touching
    /// anything if it already exists.
    fn create_with(&self, lines: &[String]) -> AppResult<bool>;

    /// Appends one line, creating the store if needed.
    fn append_line(&self, line: &str) -> AppResult<()>;

    /// Lazily yields every stored line. Fails with `StorageAbsent` if missing.
    fn lines(&self) -> AppResult<Lines<'_>>;
}

/// A flat file on disk.
///
/// Each call opens the file, does one read-all or append-one, and drops the
/// handle on return. There is no cross-process locking: two processes
/// appending to the same path can interleave their writes.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LineStorage for FileStorage {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn create_with(&self, lines: &[String]) -> AppResult<bool> {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(AppError::Io(e)),
        };
        for line in lines {
            writeln!(file, "{}", line)?;
        }
        file.flush()?;
        Ok(true)
    }

    fn append_line(&self, line: &str) -> AppResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)?;
        file.flush()?;
        Ok(())
    }

    fn lines(&self) -> AppResult<Lines<'_>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(AppError::StorageAbsent(self.location()))
            }
            Err(e) => return Err(AppError::Io(e)),
        };
        Ok(Box::new(BufReader::new(file).lines()))
    }
}

/// Store kept in memory, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    lines: std::cell::RefCell<Option<Vec<String>>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn with_lines(lines: &[&str]) -> Self {
        let lines = lines.iter().map(|line| line.to_string()).collect();
        Self {
            lines: std::cell::RefCell::new(Some(lines)),
        }
    }
}

#[cfg(test)]
impl LineStorage for MemoryStorage {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn create_with(&self, lines: &[String]) -> AppResult<bool> {
        let mut stored = self.lines.borrow_mut();
        if stored.is_some() {
            return Ok(false);
        }
        *stored = Some(lines.to_vec());
        Ok(true)
    }

    fn append_line(&self, line: &str) -> AppResult<()> {
        self.lines
            .borrow_mut()
            .get_or_insert_with(Vec::new)
            .push(line.to_string());
        Ok(())
    }

    fn lines(&self) -> AppResult<Lines<'_>> {
        let lines = self
            .lines
            .borrow()
            .clone()
            .ok_or_else(|| AppError::StorageAbsent(self.location()))?;
        Ok(Box::new(lines.into_iter().map(Ok)))
    }
}
