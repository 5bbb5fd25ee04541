//! Card components for the yearly totals and averages.
//!
//! Each currency gets its own card since amounts are never converted.

use maud::{Markup, html};

use crate::{dashboard::aggregation::ExpenseSummary, expense::Currency, html::format_amount_rounded};

/// Renders one summary card per currency with expenses.
pub(super) fn summary_cards_view(summary: &ExpenseSummary) -> Markup {
    html! {
        section class="w-full mx-auto mt-8"
        {
            div class="flex justify-between items-baseline mb-4"
            {
                h3 class="text-xl font-semibold" { "Summary" }
                span class="text-sm text-gray-600 dark:text-gray-400" { "Per currency" }
            }

            div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4"
            {
                @for &currency in summary.yearly_totals_by_currency.keys() {
                    (summary_card(summary, currency))
                }
            }
        }
    }
}

fn summary_card(summary: &ExpenseSummary, currency: Currency) -> Markup {
    let rows = [
        ("Yearly total", summary.currency_total(currency)),
        ("Avg / month", summary.currency_avg_per_month(currency)),
        ("Avg / day", summary.currency_avg_per_day(currency)),
    ];

    html! {
        div
            class="bg-white dark:bg-gray-800 border border-gray-200
                   dark:border-gray-700 rounded-lg p-4 shadow-md"
            data-currency=(currency)
        {
            h4 class="text-lg font-semibold mb-2"
            {
                (currency.symbol()) " " (currency.code())
            }

            dl class="space-y-1"
            {
                @for (label, value) in rows {
                    div class="flex justify-between gap-4"
                    {
                        dt class="text-sm text-gray-600 dark:text-gray-400" { (label) }
                        dd class="font-semibold" { (format_amount_rounded(value, currency)) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{
        dashboard::aggregation::ExpenseSummary,
        expense::{Category, Currency, Expense, Month},
    };

    use super::summary_cards_view;

    fn expense(amount: f64, currency: Currency) -> Expense {
        Expense {
            id: 0,
            month: Month::Jan,
            category: Category::new_unchecked("Rent"),
            biller: "Landlord".to_owned(),
            amount,
            currency,
        }
    }

    #[test]
    fn one_card_per_currency_with_rounded_values() {
        let summary = ExpenseSummary::from_expenses(&[
            expense(730.0, Currency::Usd),
            expense(120.4, Currency::Eur),
        ]);

        let document = Html::parse_fragment(&summary_cards_view(&summary).into_string());

        let cards = Selector::parse("div[data-currency]").unwrap();
        let currencies: Vec<_> = document
            .select(&cards)
            .filter_map(|card| card.value().attr("data-currency"))
            .collect();
        assert_eq!(currencies, vec!["USD", "EUR"]);

        let usd = Selector::parse("div[data-currency=USD] dd").unwrap();
        let values: Vec<String> = document
            .select(&usd)
            .map(|dd| dd.text().collect())
            .collect();
        assert_eq!(values, vec!["$730", "$61", "$2"]);

        let eur = Selector::parse("div[data-currency=EUR] dd").unwrap();
        let yearly: String = document
            .select(&eur)
            .next()
            .map(|dd| dd.text().collect())
            .unwrap_or_default();
        assert_eq!(yearly, "€120");
    }
}
