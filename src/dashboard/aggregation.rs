//! Aggregation of expenses into per-month, per-currency totals.
//!
//! Each (month, currency) pair is a bucket. Amounts in different currencies
//! are never converted, so every bucket is summed on its own.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::expense::{Currency, Expense, Month};

const MONTHS_PER_YEAR: f64 = 12.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// The totals of a list of expenses.
///
/// Built with [ExpenseSummary::from_expenses]. Ordered maps and a fixed
/// summation order mean the same input always produces the same totals, bit
/// for bit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpenseSummary {
    /// The sum of each bucket. Months without expenses are absent.
    pub monthly_totals: BTreeMap<Month, BTreeMap<Currency, f64>>,
    /// The sum of every bucket regardless of currency.
    ///
    /// This adds amounts in different currencies together, use
    /// [ExpenseSummary::yearly_totals_by_currency] when more than one
    /// currency is in play.
    pub yearly_total: f64,
    /// The sum of every bucket for each currency.
    pub yearly_totals_by_currency: BTreeMap<Currency, f64>,
}

impl ExpenseSummary {
    /// Sum `expenses` into buckets.
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut monthly_totals: BTreeMap<Month, BTreeMap<Currency, f64>> = BTreeMap::new();

        for expense in expenses {
            *monthly_totals
                .entry(expense.month)
                .or_default()
                .entry(expense.currency)
                .or_insert(0.0) += expense.amount;
        }

        let mut yearly_total = 0.0;
        let mut yearly_totals_by_currency: BTreeMap<Currency, f64> = BTreeMap::new();

        for (currency, total) in monthly_totals.values().flatten() {
            yearly_total += total;
            *yearly_totals_by_currency.entry(*currency).or_insert(0.0) += total;
        }

        Self {
            monthly_totals,
            yearly_total,
            yearly_totals_by_currency,
        }
    }

    /// Whether there were no expenses to aggregate.
    pub fn is_empty(&self) -> bool {
        self.monthly_totals.is_empty()
    }

    /// [ExpenseSummary::yearly_total] spread over twelve months.
    pub fn avg_per_month(&self) -> f64 {
        self.yearly_total / MONTHS_PER_YEAR
    }

    /// [ExpenseSummary::yearly_total] spread over 365 days.
    pub fn avg_per_day(&self) -> f64 {
        self.yearly_total / DAYS_PER_YEAR
    }

    /// The yearly total for `currency`, zero if it has no expenses.
    pub fn currency_total(&self, currency: Currency) -> f64 {
        self.yearly_totals_by_currency
            .get(&currency)
            .copied()
            .unwrap_or(0.0)
    }

    /// The yearly total for `currency` spread over twelve months.
    pub fn currency_avg_per_month(&self, currency: Currency) -> f64 {
        self.currency_total(currency) / MONTHS_PER_YEAR
    }

    /// The yearly total for `currency` spread over 365 days.
    pub fn currency_avg_per_day(&self, currency: Currency) -> f64 {
        self.currency_total(currency) / DAYS_PER_YEAR
    }

    /// The per-currency totals of `month`, `None` if it has no expenses.
    pub fn month_totals(&self, month: Month) -> Option<&BTreeMap<Currency, f64>> {
        self.monthly_totals.get(&month)
    }

    /// The sum of every bucket in `month` regardless of currency.
    pub fn month_total(&self, month: Month) -> f64 {
        self.month_totals(month)
            .map(|totals| totals.values().sum())
            .unwrap_or(0.0)
    }

    /// The largest [ExpenseSummary::month_total] of the year.
    pub fn max_month_total(&self) -> f64 {
        self.monthly_totals
            .keys()
            .map(|&month| self.month_total(month))
            .fold(0.0, f64::max)
    }
}
