//! The URIs of the pages and API endpoints.

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The landing page with the summary cards and calendar.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page for displaying the table of expenses.
pub const EXPENSES_VIEW: &str = "/expenses";
/// The page for logging a new expense.
pub const NEW_EXPENSE_VIEW: &str = "/expenses/new";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create expenses.
pub const EXPENSES_API: &str = "/api/expenses";
/// The route to remove every expense.
pub const RESET_EXPENSES: &str = "/api/expenses/reset";
/// The route to download the expenses as a CSV file.
pub const EXPORT_EXPENSES: &str = "/api/expenses/export";
/// The route to get the aggregated totals as JSON.
pub const SUMMARY_API: &str = "/api/summary";
