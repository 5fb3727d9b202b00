mod auth;
mod console;
mod entry;
mod report;

pub use auth::login;
pub use console::Console;
pub use entry::collect_employee_data;
pub use report::generate_report;
