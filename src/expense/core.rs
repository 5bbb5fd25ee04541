//! The expense record model and the parsing of user supplied values.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    expense::{Currency, Month},
};

/// Identifier assigned to an expense by the [crate::expense::ExpenseStore].
pub type ExpenseId = u64;

/// The biller recorded when the user does not name one.
pub const DEFAULT_BILLER: &str = "Not Specified";

/// The categories offered in the expense form.
///
/// Users may also enter their own category via [CUSTOM_CATEGORY].
pub const CATEGORIES: [&str; 6] = [
    "Utilities",
    "Rent",
    "Insurance",
    "Groceries",
    "Entertainment",
    "Other",
];

/// The form value that selects a free-text category.
pub const CUSTOM_CATEGORY: &str = "Custom";

/// A validated, non-empty category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Category(String);

impl Category {
    /// Create a category.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidInput] if `name` is empty
    /// or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::invalid_input("category", "a category is required"))
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category without validation.
    ///
    /// The caller should ensure that the string is not empty.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::new(s)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The largest amount accepted for a single expense.
///
/// Keeps the yearly totals finite no matter how many expenses are logged.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// Parse an expense amount entered by the user.
///
/// # Errors
///
/// Returns an [Error::InvalidInput] for the field "amount" if `text` is empty,
/// is not a number, is not finite, is negative or is larger than [MAX_AMOUNT].
pub fn parse_amount(text: &str) -> Result<f64, Error> {
    let text = text.trim();

    if text.is_empty() {
        return Err(Error::invalid_input("amount", "an amount is required"));
    }

    let amount = text
        .parse::<f64>()
        .map_err(|_| Error::invalid_input("amount", format!("\"{text}\" is not a number")))?;

    if !amount.is_finite() {
        return Err(Error::invalid_input("amount", "the amount must be a finite number"));
    }

    if amount < 0.0 {
        return Err(Error::invalid_input("amount", "the amount cannot be negative"));
    }

    if amount > MAX_AMOUNT {
        return Err(Error::invalid_input(
            "amount",
            "the amount cannot be more than 1,000,000,000,000",
        ));
    }

    Ok(amount)
}

/// The biller to record for an optional user supplied name.
pub fn biller_or_default(biller: Option<&str>) -> String {
    match biller.map(str::trim) {
        Some(biller) if !biller.is_empty() => biller.to_owned(),
        _ => DEFAULT_BILLER.to_owned(),
    }
}

/// A validated expense that has not been added to the store yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    /// The month the expense falls in.
    pub month: Month,
    /// What the expense was for.
    pub category: Category,
    /// Who was paid, [DEFAULT_BILLER] if not given.
    pub biller: String,
    /// A non-negative amount in `currency`.
    pub amount: f64,
    /// The currency of `amount`.
    pub currency: Currency,
}

impl ExpenseDraft {
    pub(crate) fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            month: self.month,
            category: self.category,
            biller: self.biller,
            amount: self.amount,
            currency: self.currency,
        }
    }
}

/// A single logged expense.
///
/// Expenses are immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expense {
    /// Unique for the lifetime of the store.
    pub id: ExpenseId,
    /// The month the expense falls in.
    pub month: Month,
    /// What the expense was for.
    pub category: Category,
    /// Who was paid, [DEFAULT_BILLER] if not given.
    pub biller: String,
    /// A non-negative amount in `currency`.
    pub amount: f64,
    /// The currency of `amount`.
    pub currency: Currency,
}

#[cfg(test)]
mod tests {
    use crate::Error;

    use super::{Category, DEFAULT_BILLER, MAX_AMOUNT, biller_or_default, parse_amount};

    #[test]
    fn parse_amount_accepts_decimals() {
        assert_eq!(parse_amount("1200"), Ok(1200.0));
        assert_eq!(parse_amount(" 12.50 "), Ok(12.5));
        assert_eq!(parse_amount("0"), Ok(0.0));
    }

    #[test]
    fn parse_amount_rejects_bad_input() {
        for text in ["", "   ", "abc", "12,50", "NaN", "inf", "-1"] {
            let result = parse_amount(text);

            assert!(
                matches!(result, Err(Error::InvalidInput { field: "amount", .. })),
                "want amount error for {text:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn parse_amount_caps_single_amounts() {
        assert_eq!(parse_amount("1000000000000"), Ok(MAX_AMOUNT));
        assert!(matches!(
            parse_amount("1000000000000.01"),
            Err(Error::InvalidInput { field: "amount", .. })
        ));

        let huge = parse_amount("1.7e308");
        assert!(
            matches!(huge, Err(Error::InvalidInput { field: "amount", .. })),
            "got {huge:?}"
        );
    }

    #[test]
    fn biller_defaults_when_missing_or_blank() {
        assert_eq!(biller_or_default(None), DEFAULT_BILLER);
        assert_eq!(biller_or_default(Some("  ")), DEFAULT_BILLER);
        assert_eq!(biller_or_default(Some(" Landlord ")), "Landlord");
    }

    #[test]
    fn category_is_trimmed_and_non_empty() {
        assert_eq!(Category::new(" Rent ").unwrap().as_ref(), "Rent");
        assert_eq!(
            Category::new(""),
            Err(Error::invalid_input("category", "a category is required"))
        );
    }
}
