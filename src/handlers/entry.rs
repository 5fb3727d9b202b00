use std::io::{BufRead, Write};
use chrono::NaiveDate;
use crate::errors::{AppError, AppResult};
use crate::models::TimeRecord;
use crate::payroll::dates;
use crate::services::{LineStorage, TimeRecordStore};
use super::console::Console;

/// Collects employee entries until the operator types `end`. Returns how many were stored.
pub fn collect_employee_data<R, W, S>(
    console: &mut Console<R, W>,
    store: &TimeRecordStore<S>,
) -> AppResult<usize>
where
    R: BufRead,
    W: Write,
    S: LineStorage,
{
    let mut saved = 0;
    loop {
        let name = console.prompt("Enter employee's name (or type 'end' to finish): ")?;
        if name.trim().eq_ignore_ascii_case("end") {
            break;
        }

        let (period_start, period_end) = prompt_date_range(console)?;

        let (hours_worked, hourly_rate, tax_rate) = match prompt_pay_numbers(console, &name) {
            Ok(numbers) => numbers,
            Err(AppError::Format(_)) => {
                console.say("Invalid input, please try again.")?;
                continue;
            }
            Err(e) => return Err(e),
        };

        let record = TimeRecord {
            period_start,
            period_end,
            employee_name: name,
            hours_worked,
            hourly_rate,
            tax_rate,
        };
        match store.append(&record) {
            Ok(()) => saved += 1,
            Err(AppError::Format(msg)) => {
                console.say(format!("Invalid input ({}), please try again.", msg))?;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(saved)
}

fn prompt_date_range<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> AppResult<(NaiveDate, NaiveDate)> {
    loop {
        let from = console.prompt("Enter From Date (mm/dd/yyyy): ")?;
        let to = console.prompt("Enter To Date (mm/dd/yyyy): ")?;
        if dates::is_valid(&from) && dates::is_valid(&to) {
            return Ok((dates::parse(&from)?, dates::parse(&to)?));
        }
        console.say("Invalid date format. Please enter date in mm/dd/yyyy format.")?;
    }
}

// Hours, rate and tax rate; the tax rate is entered as a percentage.
fn prompt_pay_numbers<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    name: &str,
) -> AppResult<(f64, f64, f64)> {
    let hours = parse_number(&console.prompt(&format!("Enter total hours worked for {}: ", name))?)?;
    let rate = parse_number(&console.prompt(&format!("Enter hourly rate for {}: ", name))?)?;
    let percent = parse_number(&console.prompt(&format!(
        "Enter income tax rate for {} (as a percentage, e.g., 20 for 20%): ",
        name
    ))?)?;
    Ok((hours, rate, percent / 100.0))
}

fn parse_number(text: &str) -> AppResult<f64> {
    text.trim().parse::<f64>()
        .map_err(|_| AppError::Format(format!("'{}' is not a number", text)))
}
