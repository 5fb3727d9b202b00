use chrono::NaiveDate;
use crate::errors::line::{split_fields, LineError, LineResult};
use crate::errors::{AppError, AppResult};
use crate::payroll::calculator::{self, PayBreakdown};
use crate::payroll::dates;

pub const RECORD_FIELDS: usize = 6;

/// One pay period for one employee. Records have no identity; duplicates are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRecord {
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub employee_name: String,
    pub hours_worked: f64,
    pub hourly_rate: f64,
    pub tax_rate: f64, // fraction in [0, 1]
}

impl TimeRecord {
    /// Checks the record can be stored and read back as exactly six fields.
    pub fn validate(&self) -> AppResult<()> {
        let name = &self.employee_name;
        if name.trim().is_empty() {
            return Err(AppError::Format("employee name is empty".into()));
        }
        if name.contains(|c: char| matches!(c, '|' | '\n' | '\r')) {
            return Err(AppError::Format(format!(
                "employee name '{}' contains a reserved character",
                name.escape_debug()
            )));
        }
        check_non_negative("hours worked", self.hours_worked)?;
        check_non_negative("hourly rate", self.hourly_rate)?;
        if !(0.0..=1.0).contains(&self.tax_rate) {
            return Err(AppError::Format(format!(
                "tax rate {} is outside 0..=1",
                self.tax_rate
            )));
        }
        Ok(())
    }

    pub fn pay(&self) -> PayBreakdown {
        calculator::compute(self.hours_worked, self.hourly_rate, self.tax_rate)
    }

    /// Parses `start|end|name|hours|rate|tax_rate`.
    pub fn parse_line(raw: &str, line: usize) -> LineResult<Self> {
        let fields = split_fields(raw, line, RECORD_FIELDS)?;
        let date = |value: &str| {
            dates::parse(value).map_err(|_| LineError::InvalidDate {
                line,
                value: value.to_string(),
            })
        };
        // Stored numbers must be finite and within 0..=max.
        let number = |field: &'static str, value: &str, max: f64| -> LineResult<f64> {
            let parsed = value.trim().parse::<f64>().map_err(|_| LineError::InvalidNumber {
                line,
                field,
                value: value.to_string(),
            })?;
            if !parsed.is_finite() || !(0.0..=max).contains(&parsed) {
                return Err(LineError::OutOfRange {
                    line,
                    field,
                    value: value.to_string(),
                });
            }
            Ok(parsed)
        };

        Ok(Self {
            period_start: date(fields[0])?,
            period_end: date(fields[1])?,
            employee_name: fields[2].to_string(),
            hours_worked: number("hours worked", fields[3], f64::MAX)?,
            hourly_rate: number("hourly rate", fields[4], f64::MAX)?,
            tax_rate: number("tax rate", fields[5], 1.0)?,
        })
    }

    // Numbers use Debug formatting so whole values keep their ".0" (80.0, not 80).
    pub fn to_line(&self) -> String {
        format!(
            "{}|{}|{}|{:?}|{:?}|{:?}",
            dates::format(self.period_start),
            dates::format(self.period_end),
            self.employee_name,
            self.hours_worked,
            self.hourly_rate,
            self.tax_rate
        )
    }
}

fn check_non_negative(field: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::Format(format!(
            "{} must be a non-negative number, got {}",
            field, value
        )));
    }
    Ok(())
}
