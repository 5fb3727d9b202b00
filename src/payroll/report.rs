//! Single pass over the payroll log producing itemised lines and totals.

use crate::errors::{AppError, AppResult, LineError};
use crate::models::{ReportFilter, ReportLine, ReportTotals};
use crate::services::{LineStorage, TimeRecordStore};

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub lines: Vec<ReportLine>,
    pub totals: ReportTotals,
    pub skipped: Vec<LineError>,
}

/// Outcome of a completed pass, without the itemised lines.
#[derive(Debug, Clone, PartialEq)]
pub enum Summary {
    NoData,
    Completed {
        totals: ReportTotals,
        skipped: Vec<LineError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    /// The payroll log does not exist yet.
    NoData,
    Completed(Report),
}

impl ReportOutcome {
    /// Totals of the report; all zero when there was no data.
    pub fn totals(&self) -> ReportTotals {
        match self {
            ReportOutcome::NoData => ReportTotals::default(),
            ReportOutcome::Completed(report) => report.totals,
        }
    }
}

/// Runs the report and collects every included line.
pub fn run<S: LineStorage>(
    store: &TimeRecordStore<S>,
    filter: &ReportFilter,
) -> AppResult<ReportOutcome> {
    let mut lines = Vec::new();
    let summary = run_each(store, filter, |line| lines.push(line.clone()))?;
    Ok(match summary {
        Summary::NoData => ReportOutcome::NoData,
        Summary::Completed { totals, skipped } => ReportOutcome::Completed(Report {
            lines,
            totals,
            skipped,
        }),
    })
}

/// Runs the report, handing each included line to `sink` as it is computed.
///
/// Malformed stored lines are skipped and returned in the summary. I/O
/// failures while reading abort the pass.
pub fn run_each<S, F>(
    store: &TimeRecordStore<S>,
    filter: &ReportFilter,
    mut sink: F,
) -> AppResult<Summary>
where
    S: LineStorage,
    F: FnMut(&ReportLine),
{
    let records = match store.iterate() {
        Ok(records) => records,
        Err(AppError::StorageAbsent(location)) => {
            tracing::warn!("No payroll data at {}", location);
            return Ok(Summary::NoData);
        }
        Err(e) => return Err(e),
    };

    let mut totals = ReportTotals::default();
    let mut skipped = Vec::new();
    for item in records {
        let record = match item {
            Ok(record) => record,
            Err(AppError::MalformedLine(e)) => {
                tracing::warn!(line = e.line(), "Skipping payroll {}", e);
                skipped.push(e);
                continue;
            }
            Err(e) => return Err(e),
        };

        let pay = record.pay();
        if !filter.matches(&record) {
            continue;
        }
        let line = ReportLine { record, pay };
        totals.add(&line);
        sink(&line);
    }

    tracing::debug!(
        "Report {:?} included {} records ({} skipped)",
        filter,
        totals.employee_count,
        skipped.len()
    );
    Ok(Summary::Completed { totals, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_record;
    use crate::services::storage::{FileStorage, MemoryStorage};
    use tempfile::tempdir;

    const ALICE: &str = "01/01/2024|01/15/2024|Alice|80|20.0|0.20";
    const BOB: &str = "01/16/2024|01/31/2024|Bob|40|15.0|0.10";

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn completed(outcome: ReportOutcome) -> Report {
        match outcome {
            ReportOutcome::Completed(report) => report,
            ReportOutcome::NoData => panic!("expected a completed report"),
        }
    }

    #[test]
    fn test_filter_on_start_date() {
        let store = TimeRecordStore::new(MemoryStorage::with_lines(&[ALICE, BOB]));
        let filter = ReportFilter::parse("01/01/2024").unwrap();
        let report = completed(run(&store, &filter).unwrap());

        assert_eq!(report.lines.len(), 1);
        let line = &report.lines[0];
        assert_eq!(line.record.employee_name, "Alice");
        assert_close(line.pay.gross, 1600.0);
        assert_close(line.pay.tax, 320.0);
        assert_close(line.pay.net, 1280.0);
        assert_eq!(report.totals.employee_count, 1);
        assert_close(report.totals.total_net, 1280.0);
    }

    #[test]
    fn test_filter_all() {
        let store = TimeRecordStore::new(MemoryStorage::with_lines(&[ALICE, BOB]));
        let report = completed(run(&store, &ReportFilter::All).unwrap());

        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.totals.employee_count, 2);
        assert_close(report.totals.total_hours, 120.0);
        assert_close(report.totals.total_gross, 2200.0);
        assert_close(report.totals.total_tax, 380.0);
        assert_close(report.totals.total_net, 1820.0);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_filter_is_not_a_range() {
        let store = TimeRecordStore::new(MemoryStorage::with_lines(&[ALICE, BOB]));
        let filter = ReportFilter::parse("01/10/2024").unwrap();
        let report = completed(run(&store, &filter).unwrap());
        assert!(report.lines.is_empty());
        assert_eq!(report.totals, ReportTotals::default());
    }

    #[test]
    fn test_duplicates_are_counted() {
        let store = TimeRecordStore::new(MemoryStorage::with_lines(&[ALICE, ALICE]));
        let report = completed(run(&store, &ReportFilter::All).unwrap());
        assert_eq!(report.totals.employee_count, 2);
        assert_close(report.totals.total_gross, 3200.0);
    }

    #[test]
    fn test_missing_store_is_no_data() {
        let dir = tempdir().unwrap();
        let store = TimeRecordStore::new(FileStorage::new(dir.path().join("employee_data.txt")));
        let outcome = run(&store, &ReportFilter::All).unwrap();
        assert_eq!(outcome, ReportOutcome::NoData);
        assert_eq!(outcome.totals().employee_count, 0);
    }

    #[test]
    fn test_empty_store() {
        let store = TimeRecordStore::new(MemoryStorage::with_lines(&[]));
        let outcome = run(&store, &ReportFilter::All).unwrap();
        assert_eq!(outcome.totals().employee_count, 0);
        assert!(completed(outcome).lines.is_empty());
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let store = TimeRecordStore::new(MemoryStorage::with_lines(&[
            ALICE,
            "garbage",
            "01/16/2024|01/31/2024|Bob|forty|15.0|0.10",
            BOB,
        ]));
        let report = completed(run(&store, &ReportFilter::All).unwrap());
        assert_eq!(report.totals.employee_count, 2);
        let skipped: Vec<usize> = report.skipped.iter().map(LineError::line).collect();
        assert_eq!(skipped, vec![2, 3]);
    }

    #[test]
    fn test_out_of_range_lines_do_not_poison_totals() {
        let store = TimeRecordStore::new(MemoryStorage::with_lines(&[
            ALICE,
            "01/01/2024|01/15/2024|Neg|-80|20.0|0.20",
            "01/01/2024|01/15/2024|Tax|10|10|7.5",
            "01/01/2024|01/15/2024|Nan|NaN|inf|0.1",
        ]));
        let report = completed(run(&store, &ReportFilter::All).unwrap());

        assert_eq!(report.totals.employee_count, 1);
        assert_eq!(report.lines[0].record.employee_name, "Alice");
        assert_close(report.totals.total_hours, 80.0);
        assert_close(report.totals.total_gross, 1600.0);
        assert_close(report.totals.total_net, 1280.0);

        let skipped: Vec<usize> = report.skipped.iter().map(LineError::line).collect();
        assert_eq!(skipped, vec![2, 3, 4]);
        assert!(report
            .skipped
            .iter()
            .all(|e| matches!(e, LineError::OutOfRange { .. })));
    }

    #[test]
    fn test_run_each_streams_in_order() {
        let dir = tempdir().unwrap();
        let store = TimeRecordStore::new(FileStorage::new(dir.path().join("employee_data.txt")));
        let records = [
            sample_record("02/01/2024", "02/14/2024", "Dana", 10.0, 30.0, 0.25),
            sample_record("02/15/2024", "02/28/2024", "Eli", 20.0, 12.5, 0.0),
            sample_record("02/01/2024", "02/14/2024", "Fay", 5.0, 40.0, 0.5),
        ];
        for record in &records {
            store.append(record).unwrap();
        }

        let filter = ReportFilter::parse("2/1/2024").unwrap();
        let mut names = Vec::new();
        let summary = run_each(&store, &filter, |line| {
            names.push(line.record.employee_name.clone())
        })
        .unwrap();

        assert_eq!(names, vec!["Dana", "Fay"]);
        match summary {
            Summary::Completed { totals, skipped } => {
                assert_eq!(totals.employee_count, 2);
                assert_close(totals.total_gross, 500.0);
                assert_close(totals.total_net, 325.0);
                assert!(skipped.is_empty());
            }
            Summary::NoData => panic!("expected data"),
        }
    }
}
