//! Error alerts shown to users after a failed form submission.
//!
//! Alerts are rendered as fragments that htmx swaps into the
//! `#alert-container` element defined in [crate::html::base].

use maud::{Markup, html};

/// An error message with optional details.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// The headline, shown in bold.
    pub message: String,
    /// Extra context shown after the message, omitted when empty.
    pub details: String,
}

impl Alert {
    /// Render the alert as a fragment for `#alert-container`.
    pub fn into_html(self) -> Markup {
        html! {
            div
                class="p-4 mb-4 text-sm rounded-lg text-red-800 bg-red-50 \
                    dark:bg-gray-800 dark:text-red-400"
                role="alert"
                onclick="this.parentElement.replaceChildren()"
            {
                span class="font-medium" { (self.message) }

                @if !self.details.is_empty() {
                    " " (self.details)
                }
            }
        }
    }
}
