//! Defines the route handler for the page that lists the expenses in a sortable table.

use std::borrow::Cow;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    Error, endpoints,
    expense::{
        Expense,
        create_endpoint::ExpenseStoreState,
        table::{SortDirection, SortField, SortQuery, sort_expenses},
    },
    html::{
        BUTTON_DELETE_STYLE, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_amount, link,
    },
    navigation::NavBar,
};

/// Billers longer than this many graphemes are truncated in the table.
const MAX_BILLER_GRAPHEMES: usize = 32;

/// Renders the table of expenses, sorted by the column in `query`.
pub async fn get_expenses_page(
    State(state): State<ExpenseStoreState>,
    Query(query): Query<SortQuery>,
) -> Result<Response, Error> {
    let store = state
        .expenses
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire expense store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?;

    let mut expenses: Vec<&Expense> = store.expenses().iter().collect();

    if let Some(field) = query.sort {
        sort_expenses(&mut expenses, field, query.direction);
    }

    Ok(expenses_view(&expenses, query).into_response())
}

fn expenses_view(expenses: &[&Expense], query: SortQuery) -> Markup {
    let nav_bar = NavBar::new(endpoints::EXPENSES_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="relative w-full max-w-screen-lg"
            {
                div class="flex justify-between flex-wrap items-end gap-4 mb-4"
                {
                    h1 class="text-xl font-bold" { "Expenses" }

                    div class="flex gap-4"
                    {
                        a href=(endpoints::NEW_EXPENSE_VIEW) class=(LINK_STYLE) { "Add Expense" }

                        @if !expenses.is_empty() {
                            a
                                href=(endpoints::EXPORT_EXPENSES)
                                download
                                class=(LINK_STYLE)
                            {
                                "Export CSV"
                            }

                            button
                                hx-post=(endpoints::RESET_EXPENSES)
                                hx-confirm="Remove every expense? This cannot be undone."
                                hx-target-error="#alert-container"
                                class=(BUTTON_DELETE_STYLE)
                            {
                                "Reset"
                            }
                        }
                    }
                }

                @if expenses.is_empty() {
                    p class="text-gray-600 dark:text-gray-400"
                    {
                        "No expenses logged yet. "
                        (link(endpoints::NEW_EXPENSE_VIEW, "Add one"))
                        " to get started."
                    }
                } @else {
                    (expense_table(expenses, query))
                }
            }
        }
    };

    base("Expenses", &[], &content)
}

fn expense_table(expenses: &[&Expense], query: SortQuery) -> Markup {
    html! {
        div class="overflow-x-auto rounded"
        {
            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        @for field in SortField::ALL {
                            (column_header(field, query))
                        }
                    }
                }

                tbody
                {
                    @for expense in expenses {
                        (expense_row(expense))
                    }
                }
            }
        }
    }
}

fn column_header(field: SortField, query: SortQuery) -> Markup {
    let direction = query.direction_of(field);
    let aria_sort = match direction {
        Some(SortDirection::Asc) => "ascending",
        Some(SortDirection::Desc) => "descending",
        None => "none",
    };
    let arrow = match direction {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => "",
    };

    html! {
        th scope="col" class=(TABLE_CELL_STYLE) aria-sort=(aria_sort)
        {
            a href=(query.header_url(field)) class="hover:underline"
            {
                (field.label()) (arrow)
            }
        }
    }
}

fn expense_row(expense: &Expense) -> Markup {
    let biller = truncate_graphemes(&expense.biller, MAX_BILLER_GRAPHEMES);
    let is_truncated = matches!(biller, Cow::Owned(_));

    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (expense.month) }
            td class=(TABLE_CELL_STYLE) { (expense.category) }
            td class=(TABLE_CELL_STYLE) title=[is_truncated.then_some(&expense.biller)]
            {
                (biller)
            }
            td class={(TABLE_CELL_STYLE) " text-right"}
            {
                (format_amount(expense.amount, expense.currency))
            }
            td class=(TABLE_CELL_STYLE) { (expense.currency) }
        }
    }
}

/// Shorten `text` to `max` graphemes, ending with an ellipsis when cut.
fn truncate_graphemes(text: &str, max: usize) -> Cow<'_, str> {
    match text.grapheme_indices(true).nth(max) {
        Some(_) => {
            let kept: String = text.graphemes(true).take(max.saturating_sub(1)).collect();
            Cow::Owned(format!("{kept}…"))
        }
        None => Cow::Borrowed(text),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        borrow::Cow,
        sync::{Arc, Mutex},
    };

    use axum::extract::{Query, State};
    use scraper::{Html, Selector};

    use crate::{
        expense::{
            Category, Currency, ExpenseDraft, ExpenseStore, Month,
            create_endpoint::ExpenseStoreState,
            table::{SortDirection, SortField, SortQuery},
        },
        test_utils::{assert_status_ok, assert_valid_html, parse_html_document},
    };

    use super::{get_expenses_page, truncate_graphemes};

    fn draft(month: Month, biller: &str, amount: f64) -> ExpenseDraft {
        ExpenseDraft {
            month,
            category: Category::new_unchecked("Utilities"),
            biller: biller.to_owned(),
            amount,
            currency: Currency::Usd,
        }
    }

    fn state_with(drafts: Vec<ExpenseDraft>) -> ExpenseStoreState {
        let mut store = ExpenseStore::new();
        store.append(drafts);

        ExpenseStoreState {
            expenses: Arc::new(Mutex::new(store)),
        }
    }

    fn column(document: &Html, index: usize) -> Vec<String> {
        let selector = Selector::parse(&format!("tbody tr td:nth-child({index})")).unwrap();

        document
            .select(&selector)
            .map(|cell| cell.text().collect::<String>().trim().to_owned())
            .collect()
    }

    #[tokio::test]
    async fn lists_expenses_in_insertion_order_by_default() {
        let state = state_with(vec![
            draft(Month::Mar, "Water", 10.0),
            draft(Month::Jan, "Power", 20.0),
        ]);

        let response = get_expenses_page(State(state), Query(SortQuery::default()))
            .await
            .unwrap();

        assert_status_ok(&response);
        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        assert_eq!(column(&document, 1), vec!["MAR", "JAN"]);
        assert_eq!(column(&document, 3), vec!["Water", "Power"]);
    }

    #[tokio::test]
    async fn sorts_by_query() {
        let state = state_with(vec![
            draft(Month::Mar, "Water", 10.0),
            draft(Month::Jan, "Power", 20.0),
            draft(Month::Dec, "Gas", 5.0),
        ]);
        let query = SortQuery {
            sort: Some(SortField::Amount),
            direction: SortDirection::Desc,
        };

        let response = get_expenses_page(State(state), Query(query)).await.unwrap();

        let document = parse_html_document(response).await;
        assert_eq!(column(&document, 3), vec!["Power", "Water", "Gas"]);

        let header = Selector::parse("th[aria-sort=descending] a").unwrap();
        let href = document
            .select(&header)
            .next()
            .and_then(|a| a.value().attr("href"));
        assert_eq!(href, Some("/expenses?sort=amount&direction=asc"));
    }

    #[tokio::test]
    async fn empty_store_shows_prompt() {
        let state = state_with(Vec::new());

        let response = get_expenses_page(State(state), Query(SortQuery::default()))
            .await
            .unwrap();

        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        assert!(
            document
                .select(&Selector::parse("table").unwrap())
                .next()
                .is_none()
        );
        let text = document.root_element().text().collect::<String>();
        assert!(text.contains("No expenses logged yet."));
    }

    #[tokio::test]
    async fn long_biller_is_truncated_with_tooltip() {
        let biller = "A".repeat(40);
        let state = state_with(vec![draft(Month::Jan, &biller, 1.0)]);

        let response = get_expenses_page(State(state), Query(SortQuery::default()))
            .await
            .unwrap();

        let document = parse_html_document(response).await;
        let cell = document
            .select(&Selector::parse("tbody td[title]").unwrap())
            .next()
            .expect("truncated biller should have a title");
        assert_eq!(cell.value().attr("title"), Some(biller.as_str()));
        assert_eq!(cell.text().collect::<String>().trim().chars().count(), 32);
    }

    #[test]
    fn truncation_counts_graphemes() {
        assert!(matches!(truncate_graphemes("short", 32), Cow::Borrowed("short")));

        let flags = "🇳🇿".repeat(33);
        let truncated = truncate_graphemes(&flags, 32);
        assert_eq!(truncated, format!("{}…", "🇳🇿".repeat(31)));

        let exact = "é".repeat(32);
        assert!(matches!(truncate_graphemes(&exact, 32), Cow::Borrowed(_)));
    }
}
