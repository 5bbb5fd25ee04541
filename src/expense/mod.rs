//! Expense management for the expense tracker.
//!
//! This module contains everything related to individual expenses:
//! - The `Expense` model, its month and currency, and parsing of user input
//! - The in-memory `ExpenseStore`
//! - The form, endpoints and pages for logging and listing expenses

mod core;
mod create_endpoint;
mod create_page;
mod currency;
mod expenses_page;
mod form;
mod month;
mod reset_endpoint;
mod store;
mod table;

pub use core::{
    CATEGORIES, CUSTOM_CATEGORY, Category, DEFAULT_BILLER, Expense, ExpenseDraft, ExpenseId,
    biller_or_default, parse_amount,
};
pub use create_endpoint::{ExpenseStoreState, create_expense_endpoint};
pub use create_page::get_new_expense_page;
pub use currency::{Currency, currency_symbol};
pub use expenses_page::get_expenses_page;
pub use month::Month;
pub use reset_endpoint::reset_expenses_endpoint;
pub use store::ExpenseStore;
pub use table::{SortDirection, SortField, sort_expenses};
