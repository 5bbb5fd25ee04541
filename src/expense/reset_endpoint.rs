use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{Error, endpoints, expense::create_endpoint::ExpenseStoreState};

/// A route handler that removes every expense and redirects to the expenses view.
pub async fn reset_expenses_endpoint(State(state): State<ExpenseStoreState>) -> Response {
    let mut store = match state.expenses.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire expense store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    let removed = store.len();
    store.replace_all(Vec::new());
    tracing::info!("removed {removed} expense(s)");

    (
        HxRedirect(endpoints::EXPENSES_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
