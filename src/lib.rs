//! ExpenSage is a web app for logging monthly expenses and seeing where the
//! money goes over the year.
//!
//! This library provides a server that directly serves HTML pages. Expenses
//! are held in memory for the lifetime of the server.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod dashboard;
mod endpoints;
mod error;
mod error_page;
mod export;
mod expense;
mod html;
mod logging;
mod navigation;
mod not_found;
mod recurrence;
mod routing;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use dashboard::{ExpenseSummary, SummaryResponse};
pub use error::Error;
pub use export::expenses_to_csv;
pub use expense::{
    CATEGORIES, Category, Currency, DEFAULT_BILLER, Expense, ExpenseDraft, ExpenseId,
    ExpenseStore, Month, SortDirection, SortField, currency_symbol, sort_expenses,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use recurrence::{Frequency, RecurringExpense, expand_recurring_expense};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
