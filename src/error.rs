//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, error_page::ErrorPage};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The user submitted a value that cannot be turned into an expense.
    ///
    /// `field` is the name of the offending form field, e.g. "amount", and
    /// `reason` is a human readable explanation that is safe to show the user.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        /// The name of the form field that failed validation.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Could not acquire the lock on the in-memory expense store.
    #[error("could not acquire the expense store lock")]
    StoreLockError,

    /// The expenses could not be written as CSV.
    #[error("could not write CSV: {0}")]
    CsvError(String),
}

impl Error {
    /// Shorthand for creating an [Error::InvalidInput].
    pub(crate) fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidInput { field, reason } => ErrorPage {
                description: "Invalid input",
                fix: &format!("The {field} field is not valid: {reason}"),
            }
            .into_response_with_status(StatusCode::BAD_REQUEST),
            Error::StoreLockError => ErrorPage::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ErrorPage::default().into_response()
            }
        }
    }
}

impl Error {
    /// Render the error as an alert fragment for htmx requests.
    pub(crate) fn into_alert_response(self) -> Response {
        match self {
            Error::InvalidInput { field, reason } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Alert {
                    message: format!("Invalid {}", field.replace('_', " ")),
                    details: reason,
                }
                .into_html(),
            )
                .into_response(),
            Error::StoreLockError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert {
                    message: "Could not access expenses".to_owned(),
                    details: "The expense store is unavailable, check the server logs for more details."
                        .to_owned(),
                }
                .into_html(),
            )
                .into_response(),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert {
                    message: "Something went wrong".to_owned(),
                    details: "An unexpected error occurred, check the server logs for more details."
                        .to_owned(),
                }
                .into_html(),
            )
                .into_response(),
        }
    }
}
