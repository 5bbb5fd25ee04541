//! Defines the endpoint for logging new expenses.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, endpoints,
    expense::{ExpenseStore, form::ExpenseForm},
};

/// The state needed to add expenses.
#[derive(Debug, Clone)]
pub struct ExpenseStoreState {
    /// The collection of expenses.
    pub expenses: Arc<Mutex<ExpenseStore>>,
}

impl FromRef<AppState> for ExpenseStoreState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expenses: state.expenses.clone(),
        }
    }
}

/// A route handler for logging an expense, redirects to the expenses view on success.
///
/// A recurring expense is expanded into all of its occurrences, which are
/// added to the store together.
pub async fn create_expense_endpoint(
    State(state): State<ExpenseStoreState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let drafts = match form.validate() {
        Ok(drafts) => drafts,
        Err(error) => {
            tracing::debug!("rejected expense form {form:?}: {error}");
            return error.into_alert_response();
        }
    };

    let mut store = match state.expenses.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire expense store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    let created = store.append(drafts);
    tracing::info!(
        "logged {} expense(s) with IDs {:?}",
        created.len(),
        created.iter().map(|expense| expense.id).collect::<Vec<_>>()
    );

    (
        HxRedirect(endpoints::EXPENSES_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
