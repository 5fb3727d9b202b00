use crate::errors::{AppError, AppResult};
use crate::models::TimeRecord;
use super::storage::{LineStorage, Lines};

/// Append-only log of time records.
pub struct TimeRecordStore<S> {
    storage: S,
}

impl<S: LineStorage> TimeRecordStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Validates and appends one record, creating the store if absent.
    pub fn append(&self, record: &TimeRecord) -> AppResult<()> {
        record.validate()?;
        self.storage.append_line(&record.to_line())?;
        tracing::info!(
            "Recorded {} hours for {} ({} - {})",
            record.hours_worked,
            record.employee_name,
            record.period_start,
            record.period_end
        );
        Ok(())
    }

    /// Lazily reads the store from the start.
    ///
    /// Fails with `StorageAbsent` if there is nothing to read. Each item is
    /// either a record, `MalformedLine` for a line that does not parse, or
    /// `Io` if reading fails.
    pub fn iterate(&self) -> AppResult<RecordIter<'_>> {
        Ok(RecordIter {
            lines: self.storage.lines()?,
            line: 0,
        })
    }
}

pub struct RecordIter<'a> {
    lines: Lines<'a>,
    line: usize,
}

impl Iterator for RecordIter<'_> {
    type Item = AppResult<TimeRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.lines.next()?;
        self.line += 1;
        Some(match raw {
            Ok(raw) => TimeRecord::parse_line(&raw, self.line).map_err(AppError::from),
            Err(e) => Err(AppError::Io(e)),
        })
    }
}
