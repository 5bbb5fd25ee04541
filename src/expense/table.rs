//! Sorting of the expense table.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::{endpoints, expense::Expense};

/// A column the expense table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Chronological, January first.
    Month,
    /// Alphabetical.
    Category,
    /// Alphabetical.
    Biller,
    /// Numeric, smallest first.
    Amount,
    /// By currency code.
    Currency,
}

impl SortField {
    /// The columns in the order they are displayed.
    pub const ALL: [SortField; 5] = [
        SortField::Month,
        SortField::Category,
        SortField::Biller,
        SortField::Amount,
        SortField::Currency,
    ];

    /// The name used in the `sort` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Month => "month",
            SortField::Category => "category",
            SortField::Biller => "biller",
            SortField::Amount => "amount",
            SortField::Currency => "currency",
        }
    }

    /// The column heading.
    pub fn label(self) -> &'static str {
        match self {
            SortField::Month => "Month",
            SortField::Category => "Category",
            SortField::Biller => "Biller",
            SortField::Amount => "Amount",
            SortField::Currency => "Currency",
        }
    }

    fn compare(self, a: &Expense, b: &Expense) -> Ordering {
        match self {
            SortField::Month => a.month.cmp(&b.month),
            SortField::Category => a.category.as_ref().cmp(b.category.as_ref()),
            SortField::Biller => a.biller.cmp(&b.biller),
            SortField::Amount => a.amount.total_cmp(&b.amount),
            SortField::Currency => a.currency.code().cmp(b.currency.code()),
        }
    }
}

/// The order of a sorted column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// The name used in the `direction` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// The query parameters of the expenses page, e.g. `?sort=amount&direction=desc`.
///
/// Without `sort` the expenses are shown in the order they were logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SortQuery {
    pub sort: Option<SortField>,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortQuery {
    /// The direction `field` is sorted in, if it is the active column.
    pub fn direction_of(self, field: SortField) -> Option<SortDirection> {
        (self.sort == Some(field)).then_some(self.direction)
    }

    /// The URL a column header links to.
    ///
    /// Clicking the active column toggles the direction, any other column
    /// starts in ascending order.
    pub fn header_url(self, field: SortField) -> String {
        let direction = match self.direction_of(field) {
            Some(direction) => direction.reverse(),
            None => SortDirection::Asc,
        };

        format!(
            "{}?sort={}&direction={}",
            endpoints::EXPENSES_VIEW,
            field.as_str(),
            direction.as_str()
        )
    }
}

/// Sort `expenses` in place by `field`.
///
/// The sort is stable in both directions: expenses that compare equal keep
/// their relative order.
pub fn sort_expenses<E>(expenses: &mut [E], field: SortField, direction: SortDirection)
where
    E: AsRef<Expense>,
{
    match direction {
        SortDirection::Asc => {
            expenses.sort_by(|a, b| field.compare(a.as_ref(), b.as_ref()));
        }
        SortDirection::Desc => {
            expenses.sort_by(|a, b| field.compare(b.as_ref(), a.as_ref()));
        }
    }
}

impl AsRef<Expense> for Expense {
    fn as_ref(&self) -> &Expense {
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::expense::{Category, Currency, Expense, ExpenseId, Month};

    use super::{SortDirection, SortField, SortQuery, sort_expenses};

    fn expense(
        id: ExpenseId,
        month: Month,
        category: &str,
        biller: &str,
        amount: f64,
        currency: Currency,
    ) -> Expense {
        Expense {
            id,
            month,
            category: Category::new_unchecked(category),
            biller: biller.to_owned(),
            amount,
            currency,
        }
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense(1, Month::Mar, "Rent", "Landlord", 500.0, Currency::Inr),
            expense(2, Month::Jan, "Groceries", "Market", 20.0, Currency::Usd),
            expense(3, Month::Dec, "Rent", "Agency", 500.0, Currency::Eur),
            expense(4, Month::Jan, "Utilities", "Power Co", 75.5, Currency::Gbp),
        ]
    }

    fn ids(expenses: &[Expense]) -> Vec<ExpenseId> {
        expenses.iter().map(|expense| expense.id).collect()
    }

    #[test]
    fn month_sorts_chronologically_not_alphabetically() {
        let mut expenses = sample();

        sort_expenses(&mut expenses, SortField::Month, SortDirection::Asc);

        assert_eq!(ids(&expenses), vec![2, 4, 1, 3]);
    }

    #[test]
    fn amount_sorts_numerically() {
        let mut expenses = sample();

        sort_expenses(&mut expenses, SortField::Amount, SortDirection::Asc);

        assert_eq!(ids(&expenses), vec![2, 4, 1, 3]);
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let mut ascending = sample();
        sort_expenses(&mut ascending, SortField::Category, SortDirection::Asc);
        assert_eq!(ids(&ascending), vec![2, 1, 3, 4]);

        let mut descending = sample();
        sort_expenses(&mut descending, SortField::Category, SortDirection::Desc);
        assert_eq!(ids(&descending), vec![4, 1, 3, 2]);

        let mut by_amount = sample();
        sort_expenses(&mut by_amount, SortField::Amount, SortDirection::Desc);
        assert_eq!(ids(&by_amount), vec![1, 3, 4, 2]);
    }

    #[test]
    fn currency_sorts_by_code() {
        let mut expenses = sample();

        sort_expenses(&mut expenses, SortField::Currency, SortDirection::Asc);

        // EUR, GBP, INR, USD
        assert_eq!(ids(&expenses), vec![3, 4, 1, 2]);
    }

    #[test]
    fn biller_sorts_lexicographically() {
        let mut expenses = sample();

        sort_expenses(&mut expenses, SortField::Biller, SortDirection::Desc);

        assert_eq!(ids(&expenses), vec![4, 2, 1, 3]);
    }

    #[test]
    fn sorts_references() {
        let expenses = sample();
        let mut refs: Vec<&Expense> = expenses.iter().collect();

        sort_expenses(&mut refs, SortField::Month, SortDirection::Desc);

        let got: Vec<_> = refs.iter().map(|expense| expense.id).collect();
        assert_eq!(got, vec![3, 1, 2, 4]);
    }

    #[test]
    fn active_header_toggles_direction() {
        let query = SortQuery {
            sort: Some(SortField::Amount),
            direction: SortDirection::Asc,
        };

        assert_eq!(
            query.header_url(SortField::Amount),
            "/expenses?sort=amount&direction=desc"
        );
        assert_eq!(
            query.header_url(SortField::Month),
            "/expenses?sort=month&direction=asc"
        );

        let query = SortQuery {
            direction: SortDirection::Desc,
            ..query
        };
        assert_eq!(
            query.header_url(SortField::Amount),
            "/expenses?sort=amount&direction=asc"
        );
    }

    #[test]
    fn query_decodes_from_url() {
        let query: SortQuery = serde_html_form::from_str("sort=biller&direction=desc").unwrap();
        assert_eq!(
            query,
            SortQuery {
                sort: Some(SortField::Biller),
                direction: SortDirection::Desc
            }
        );

        let query: SortQuery = serde_html_form::from_str("").unwrap();
        assert_eq!(query, SortQuery::default());
    }
}
