//! A full page explaining an error, used when a non-htmx request fails.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// An error page with a short description and a suggested fix.
///
/// Responds with 500 by default, see [ErrorPage::into_response_with_status]
/// for other statuses.
pub struct ErrorPage<'a> {
    pub description: &'a str,
    pub fix: &'a str,
}

impl Default for ErrorPage<'_> {
    fn default() -> Self {
        Self {
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs",
        }
    }
}

impl ErrorPage<'_> {
    pub fn into_html(self, header: &str) -> Html<String> {
        Html(error_view("Error", header, self.description, self.fix).into_string())
    }

    /// Render the page with `status` shown as the heading, e.g. "400".
    pub fn into_response_with_status(self, status: StatusCode) -> Response {
        (status, self.into_html(status.as_str())).into_response()
    }
}

impl IntoResponse for ErrorPage<'_> {
    fn into_response(self) -> Response {
        self.into_response_with_status(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
