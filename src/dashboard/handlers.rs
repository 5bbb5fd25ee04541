//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - The route handler for the dashboard page
//! - The JSON endpoint for the aggregated totals
//! - HTML view functions for rendering the dashboard UI

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Serialize;

use crate::{
    Error,
    dashboard::{
        aggregation::ExpenseSummary,
        calendar::{calendar_grid, calendar_view},
        cards::summary_cards_view,
    },
    endpoints,
    expense::ExpenseStoreState,
    html::{base, link},
    navigation::NavBar,
};

/// Aggregate every expense in the store.
fn summarise(state: &ExpenseStoreState) -> Result<ExpenseSummary, Error> {
    let store = state
        .expenses
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire expense store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?;

    Ok(ExpenseSummary::from_expenses(store.expenses()))
}

/// Display a page with the yearly totals and a calendar of monthly totals.
pub async fn get_dashboard_page(State(state): State<ExpenseStoreState>) -> Result<Response, Error> {
    let summary = summarise(&state)?;
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);

    if summary.is_empty() {
        return Ok(dashboard_no_data_view(nav_bar).into_response());
    }

    Ok(dashboard_view(nav_bar, &summary).into_response())
}

/// The aggregated totals as returned by [get_summary].
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// The totals, flattened into the top level object.
    #[serde(flatten)]
    pub summary: ExpenseSummary,
    /// See [ExpenseSummary::avg_per_month].
    pub avg_per_month: f64,
    /// See [ExpenseSummary::avg_per_day].
    pub avg_per_day: f64,
}

/// Get the aggregated totals as JSON.
pub async fn get_summary(
    State(state): State<ExpenseStoreState>,
) -> Result<Json<SummaryResponse>, Error> {
    let summary = summarise(&state)?;

    Ok(Json(SummaryResponse {
        avg_per_month: summary.avg_per_month(),
        avg_per_day: summary.avg_per_day(),
        summary,
    }))
}

/// Renders the dashboard page when no expenses have been logged.
fn dashboard_no_data_view(nav_bar: NavBar) -> Markup {
    let nav_bar = nav_bar.into_html();
    let new_expense_link = link(endpoints::NEW_EXPENSE_VIEW, "logging an expense");

    let content = html!(
        (nav_bar)

        div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "Totals will show up here once you add some expenses.
                Get started by " (new_expense_link) "."
            }
        }
    );

    base("Dashboard", &[], &content)
}

fn dashboard_view(nav_bar: NavBar, summary: &ExpenseSummary) -> Markup {
    let nav_bar = nav_bar.into_html();
    let grid = calendar_grid(summary);

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (summary_cards_view(summary))
            (calendar_view(&grid))
        }
    );

    base("Dashboard", &[], &content)
}
