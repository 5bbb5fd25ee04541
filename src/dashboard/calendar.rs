//! The calendar grid of monthly totals shown on the dashboard.

use maud::{Markup, html};

use crate::{
    dashboard::aggregation::ExpenseSummary,
    expense::{Currency, Month},
    html::format_amount,
};

/// The number of months in each row of the grid.
const GRID_COLUMNS: usize = 3;

/// The background opacity of the month with the largest total.
const MAX_HEAT: f64 = 0.5;

/// One month in the calendar grid.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct CalendarCell {
    pub month: Month,
    /// The total for each currency used in the month, empty if the month has
    /// no expenses.
    pub totals: Vec<(Currency, f64)>,
    /// The background intensity, between zero and [MAX_HEAT].
    pub heat: f64,
}

/// Lay out the twelve months as four rows of three, January first.
pub(super) fn calendar_grid(summary: &ExpenseSummary) -> Vec<Vec<CalendarCell>> {
    let max_month_total = summary.max_month_total();

    Month::ALL
        .chunks(GRID_COLUMNS)
        .map(|row| {
            row.iter()
                .map(|&month| CalendarCell {
                    month,
                    totals: summary
                        .month_totals(month)
                        .map(|totals| totals.iter().map(|(&c, &t)| (c, t)).collect())
                        .unwrap_or_default(),
                    heat: heat(summary.month_total(month), max_month_total),
                })
                .collect()
        })
        .collect()
}

fn heat(month_total: f64, max_month_total: f64) -> f64 {
    if max_month_total <= 0.0 {
        return 0.0;
    }

    (month_total / max_month_total).min(1.0) * MAX_HEAT
}

pub(super) fn calendar_view(grid: &[Vec<CalendarCell>]) -> Markup {
    html! {
        section class="w-full mx-auto mt-8 mb-8"
        {
            h3 class="text-xl font-semibold mb-4" { "Calendar" }

            div class="grid grid-cols-3 gap-4"
            {
                @for row in grid {
                    @for cell in row {
                        (calendar_cell_view(cell))
                    }
                }
            }
        }
    }
}

fn calendar_cell_view(cell: &CalendarCell) -> Markup {
    let background = format!("background-color: rgba(37, 99, 235, {:.3});", cell.heat);

    html! {
        div
            class="border border-gray-200 dark:border-gray-700 rounded-lg p-4 min-h-[100px]"
            style=(background)
            data-month=(cell.month)
        {
            h4 class="font-semibold mb-2" { (cell.month) }

            @if cell.totals.is_empty() {
                p class="text-sm text-gray-500 dark:text-gray-400" { "No expenses" }
            } @else {
                ul class="text-sm"
                {
                    @for (currency, total) in &cell.totals {
                        li { (format_amount(*total, *currency)) }
                    }
                }
            }
        }
    }
}
