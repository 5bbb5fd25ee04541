//! Dashboard module
//!
//! Provides an overview page with the yearly totals per currency and a
//! calendar of monthly totals, plus the same totals as JSON.

mod aggregation;
mod calendar;
mod cards;
mod handlers;

pub use aggregation::ExpenseSummary;
pub use handlers::{SummaryResponse, get_dashboard_page, get_summary};
