use std::io::{BufRead, Write};
use crate::errors::{AppError, AppResult};
use crate::models::ReportFilter;
use crate::payroll::report::{self, ReportOutcome};
use crate::services::{LineStorage, TimeRecordStore};
use super::console::Console;

/// Asks for the report filter and prints the itemised report and totals.
pub fn generate_report<R, W, S>(
    console: &mut Console<R, W>,
    store: &TimeRecordStore<S>,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    S: LineStorage,
{
    let input = console.prompt("Enter the From Date for the report (or 'All' to display all records): ")?;
    let filter = match ReportFilter::parse(&input) {
        Ok(filter) => filter,
        Err(AppError::Format(_)) => {
            console.say("Invalid date format. Please enter date in mm/dd/yyyy format.")?;
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let outcome = report::run(store, &filter)?;
    tracing::debug!("Report totals: {:?}", outcome.totals());
    let report = match outcome {
        ReportOutcome::NoData => {
            console.say("No data available. Please enter employee data first.")?;
            return Ok(());
        }
        ReportOutcome::Completed(report) => report,
    };

    console.say("\nEmployee Payroll Information:")?;
    for line in &report.lines {
        console.say(format!("\n{}", line))?;
    }
    for skipped in &report.skipped {
        console.say(format!("\nSkipped malformed record: {}", skipped))?;
    }
    console.say(format!("\n{}", report.totals))?;
    Ok(())
}
