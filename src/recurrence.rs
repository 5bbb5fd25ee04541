//! Expansion of a recurring expense into one expense per occurrence.
//!
//! A recurring expense starts in a given month and repeats through the
//! twelve-month cycle, wrapping around after December.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    expense::{Category, Currency, ExpenseDraft, Month},
};

/// How often a recurring expense occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Once a month, twelve occurrences.
    Monthly,
    /// Every three months, four occurrences.
    Quarterly,
    /// Twice a month, the amount split evenly across both occurrences.
    Fortnightly,
}

impl Frequency {
    /// All frequencies in the order they are offered in forms.
    pub const ALL: [Frequency; 3] = [
        Frequency::Monthly,
        Frequency::Quarterly,
        Frequency::Fortnightly,
    ];

    /// The number of months between occurrences.
    fn month_step(self) -> usize {
        match self {
            Frequency::Monthly | Frequency::Fortnightly => 1,
            Frequency::Quarterly => 3,
        }
    }

    /// The number of records created for each month that has an occurrence.
    fn occurrences_per_month(self) -> usize {
        match self {
            Frequency::Monthly | Frequency::Quarterly => 1,
            Frequency::Fortnightly => 2,
        }
    }

    /// The lowercase name used in forms and query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Fortnightly => "fortnightly",
        }
    }

    /// The capitalised name shown to users.
    pub fn label(self) -> &'static str {
        match self {
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Fortnightly => "Fortnightly",
        }
    }
}

impl FromStr for Frequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        Self::ALL
            .into_iter()
            .find(|frequency| frequency.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                Error::invalid_input(
                    "frequency",
                    format!("\"{name}\" is not a supported frequency"),
                )
            })
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The input for an expense that repeats through the year.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurringExpense {
    /// The month of the first occurrence.
    pub start_month: Month,
    /// The category of every occurrence.
    pub category: Category,
    /// The biller of every occurrence.
    pub biller: String,
    /// The amount due each month.
    pub amount: f64,
    /// The currency of `amount`.
    pub currency: Currency,
    /// How often the expense occurs.
    pub frequency: Frequency,
}

/// Expand `seed` into one draft per occurrence.
///
/// Drafts are ordered by their offset from the start month. Every draft has
/// the category, biller and currency of `seed`. Fortnightly occurrences each
/// get half of the amount so that the month still totals the full amount.
pub fn expand_recurring_expense(seed: &RecurringExpense) -> Vec<ExpenseDraft> {
    let step = seed.frequency.month_step();
    let per_month = seed.frequency.occurrences_per_month();
    let amount = seed.amount / per_month as f64;

    (0..Month::ALL.len())
        .step_by(step)
        .flat_map(|offset| {
            let month = seed.start_month.offset(offset);

            (0..per_month).map(move |_| ExpenseDraft {
                month,
                category: seed.category.clone(),
                biller: seed.biller.clone(),
                amount,
                currency: seed.currency,
            })
        })
        .collect()
}
