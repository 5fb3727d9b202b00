use chrono::NaiveDate;
use std::fmt;
use crate::errors::AppResult;
use crate::payroll::calculator::PayBreakdown;
use crate::payroll::dates;
use super::TimeRecord;

/// Which records a report includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFilter {
    All,
    /// Records whose period starts on exactly this date; not a range.
    StartingOn(NaiveDate),
}

impl ReportFilter {
    /// Accepts `all` in any case, or a `mm/dd/yyyy` date.
    pub fn parse(text: &str) -> AppResult<Self> {
        let text = text.trim();
        if text.eq_ignore_ascii_case("all") {
            return Ok(ReportFilter::All);
        }
        dates::parse(text).map(ReportFilter::StartingOn)
    }

    pub fn matches(&self, record: &TimeRecord) -> bool {
        match self {
            ReportFilter::All => true,
            ReportFilter::StartingOn(date) => record.period_start == *date,
        }
    }
}

/// One included record with its computed pay.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub record: TimeRecord,
    pub pay: PayBreakdown,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = &self.record;
        writeln!(f, "From Date: {}", dates::format(record.period_start))?;
        writeln!(f, "To Date: {}", dates::format(record.period_end))?;
        writeln!(f, "Employee Name: {}", record.employee_name)?;
        writeln!(f, "Total Hours Worked: {:?}", record.hours_worked)?;
        writeln!(f, "Hourly Rate: ${:.2}", record.hourly_rate)?;
        writeln!(f, "Gross Pay: ${:.2}", self.pay.gross)?;
        writeln!(f, "Income Tax Rate: {:.2}%", record.tax_rate * 100.0)?;
        writeln!(f, "Income Tax: ${:.2}", self.pay.tax)?;
        write!(f, "Net Pay: ${:.2}", self.pay.net)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReportTotals {
    pub employee_count: usize,
    pub total_hours: f64,
    pub total_gross: f64,
    pub total_tax: f64,
    pub total_net: f64,
}

impl ReportTotals {
    pub fn add(&mut self, line: &ReportLine) {
        self.employee_count += 1;
        self.total_hours += line.record.hours_worked;
        self.total_gross += line.pay.gross;
        self.total_tax += line.pay.tax;
        self.total_net += line.pay.net;
    }
}

impl fmt::Display for ReportTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Totals Summary ---")?;
        writeln!(f, "Total Number of Employees: {}", self.employee_count)?;
        writeln!(f, "Total Hours Worked: {:.2}", self.total_hours)?;
        writeln!(f, "Total Gross Pay: ${:.2}", self.total_gross)?;
        writeln!(f, "Total Income Tax: ${:.2}", self.total_tax)?;
        write!(f, "Total Net Pay: ${:.2}", self.total_net)
    }
}
