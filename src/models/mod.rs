mod user;
mod record;
mod report;

pub use user::{AuthenticatedSession, Role, UserCredential};
pub use record::TimeRecord;
pub use report::{ReportFilter, ReportLine, ReportTotals};

#[cfg(test)]
pub(crate) use record::tests::record as sample_record;
