//! The form for logging an expense and its validation into drafts.
//!
//! The same fields serve one-off and recurring expenses: ticking the recurring
//! checkbox reveals the frequency select and turns the month into the start
//! month.

use std::str::FromStr;

use maud::{Markup, PreEscaped, html};
use serde::Deserialize;

use crate::{
    Error,
    expense::{
        CATEGORIES, CUSTOM_CATEGORY, Category, Currency, ExpenseDraft, Month, biller_or_default,
        parse_amount,
    },
    html::{FORM_CHECKBOX_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, HeadElement},
    recurrence::{Frequency, RecurringExpense, expand_recurring_expense},
};

/// The form data for logging an expense.
///
/// Every field is optional so that a missing value is reported as an
/// [Error::InvalidInput] naming the field rather than a generic rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ExpenseForm {
    /// The month of the expense, or the first month of a recurring expense.
    pub month: Option<String>,
    /// One of [CATEGORIES] or [CUSTOM_CATEGORY].
    pub category: Option<String>,
    /// The category name used when `category` is [CUSTOM_CATEGORY].
    pub custom_category: Option<String>,
    pub biller: Option<String>,
    pub currency: Option<String>,
    /// The amount as entered by the user.
    pub amount: Option<String>,
    /// Present when the recurring checkbox is ticked.
    pub recurring: Option<String>,
    /// Required when `recurring` is set.
    pub frequency: Option<String>,
}

impl ExpenseForm {
    /// Whether the user asked for the expense to repeat.
    pub fn is_recurring(&self) -> bool {
        self.recurring.is_some()
    }

    /// Validate the form and turn it into the drafts to add to the store.
    ///
    /// A one-off expense yields a single draft, a recurring expense yields one
    /// draft per occurrence.
    ///
    /// # Errors
    ///
    /// Returns an [Error::InvalidInput] naming the first field that is missing
    /// or cannot be parsed. Nothing is produced for a partially valid form.
    pub fn validate(&self) -> Result<Vec<ExpenseDraft>, Error> {
        let month_field = if self.is_recurring() {
            "start_month"
        } else {
            "month"
        };
        let month: Month = parse_field(self.month.as_deref(), month_field)?;
        let category = self.category()?;
        let biller = biller_or_default(self.biller.as_deref());
        let amount = parse_amount(self.amount.as_deref().unwrap_or_default())?;
        let currency: Currency = parse_field(self.currency.as_deref(), "currency")?;

        if !self.is_recurring() {
            return Ok(vec![ExpenseDraft {
                month,
                category,
                biller,
                amount,
                currency,
            }]);
        }

        let frequency: Frequency = parse_field(self.frequency.as_deref(), "frequency")?;

        Ok(expand_recurring_expense(&RecurringExpense {
            start_month: month,
            category,
            biller,
            amount,
            currency,
            frequency,
        }))
    }

    fn category(&self) -> Result<Category, Error> {
        match self.category.as_deref().map(str::trim) {
            Some(CUSTOM_CATEGORY) => {
                Category::new(self.custom_category.as_deref().unwrap_or_default())
                    .map_err(|error| rename_field(error, "custom_category"))
            }
            category => Category::new(category.unwrap_or_default()),
        }
    }
}

fn parse_field<T>(value: Option<&str>, field: &'static str) -> Result<T, Error>
where
    T: FromStr<Err = Error>,
{
    let value = value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::invalid_input(field, "a value is required"))?;

    value.parse().map_err(|error| rename_field(error, field))
}

fn rename_field(error: Error, field: &'static str) -> Error {
    match error {
        Error::InvalidInput { reason, .. } => Error::InvalidInput { field, reason },
        error => error,
    }
}

/// Hides the custom category input and the frequency select until they apply.
pub fn expense_form_styles() -> HeadElement {
    HeadElement::Style(PreEscaped(
        r#"
        form:not(:has(#category option[value="Custom"]:checked)) #custom-category-field,
        form:not(:has(#recurring:checked)) #frequency-field {
            display: none;
        }
        "#
        .to_owned(),
    ))
}

pub fn expense_form_fields(default_currency: Currency) -> Markup {
    html! {
        div
        {
            label
                for="month"
                class=(FORM_LABEL_STYLE)
            {
                "Month"
            }

            select
                name="month"
                id="month"
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @for month in Month::ALL {
                    option value=(month.as_str()) { (month.as_str()) }
                }
            }
        }

        div
        {
            label
                for="category"
                class=(FORM_LABEL_STYLE)
            {
                "Category"
            }

            select
                name="category"
                id="category"
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @for category in CATEGORIES {
                    option value=(category) { (category) }
                }

                option value=(CUSTOM_CATEGORY) { "Custom..." }
            }
        }

        div id="custom-category-field"
        {
            label
                for="custom_category"
                class=(FORM_LABEL_STYLE)
            {
                "Custom category"
            }

            input
                name="custom_category"
                id="custom_category"
                type="text"
                placeholder="e.g. Gym"
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="biller"
                class=(FORM_LABEL_STYLE)
            {
                "Biller"
            }

            input
                name="biller"
                id="biller"
                type="text"
                placeholder="Not Specified"
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="amount"
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            input
                name="amount"
                id="amount"
                type="number"
                step="0.01"
                min="0"
                placeholder="0.00"
                required
                autofocus
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="currency"
                class=(FORM_LABEL_STYLE)
            {
                "Currency"
            }

            select
                name="currency"
                id="currency"
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @for currency in Currency::ALL {
                    option
                        value=(currency.code())
                        selected[currency == default_currency]
                    {
                        (currency.symbol()) " " (currency.code())
                    }
                }
            }
        }

        div class="flex items-center gap-3"
        {
            input
                name="recurring"
                id="recurring"
                type="checkbox"
                class=(FORM_CHECKBOX_STYLE);

            label
                for="recurring"
                class=(FORM_LABEL_STYLE)
            {
                "Recurring expense"
            }
        }

        div id="frequency-field"
        {
            label
                for="frequency"
                class=(FORM_LABEL_STYLE)
            {
                "Frequency"
            }

            select
                name="frequency"
                id="frequency"
                class=(FORM_TEXT_INPUT_STYLE)
            {
                @for frequency in Frequency::ALL {
                    option value=(frequency.as_str()) { (frequency.label()) }
                }
            }
        }
    }
}
