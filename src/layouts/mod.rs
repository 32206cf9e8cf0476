//! Page layouts: the bare public shell and the dashboard shell.

mod dashboard;
mod public;

pub use dashboard::DashboardLayout;
pub use public::PublicLayout;
