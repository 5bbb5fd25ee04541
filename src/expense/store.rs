//! The in-memory collection of expenses owned by the application state.

use crate::expense::{Expense, ExpenseDraft, ExpenseId};

/// Holds every expense recorded during the lifetime of the server.
///
/// The collection can only be changed in two ways: [ExpenseStore::append]
/// adds new expenses to the end and [ExpenseStore::replace_all] swaps out the
/// entire collection. IDs are never reused, even after the collection is
/// replaced.
#[derive(Debug)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    next_id: ExpenseId,
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: 1,
        }
    }

    /// All expenses in the order they were added.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The number of expenses in the store.
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the store has no expenses.
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Add `drafts` to the end of the collection, assigning each a new ID.
    ///
    /// Returns the newly created expenses.
    pub fn append(&mut self, drafts: Vec<ExpenseDraft>) -> &[Expense] {
        let start = self.expenses.len();
        let created = self.assign_ids(drafts);
        self.expenses.extend(created);

        &self.expenses[start..]
    }

    /// Replace the entire collection with `drafts`.
    ///
    /// Passing an empty vector clears the store.
    pub fn replace_all(&mut self, drafts: Vec<ExpenseDraft>) {
        self.expenses = self.assign_ids(drafts);
    }

    fn assign_ids(&mut self, drafts: Vec<ExpenseDraft>) -> Vec<Expense> {
        drafts
            .into_iter()
            .map(|draft| {
                let id = self.next_id;
                self.next_id += 1;
                draft.into_expense(id)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::expense::{Category, Currency, ExpenseDraft, Month};

    use super::ExpenseStore;

    fn draft(month: Month, amount: f64) -> ExpenseDraft {
        ExpenseDraft {
            month,
            category: Category::new_unchecked("Rent"),
            biller: "Landlord".to_owned(),
            amount,
            currency: Currency::Inr,
        }
    }

    #[test]
    fn new_store_is_empty() {
        let store = ExpenseStore::new();

        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.expenses().is_empty());
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = ExpenseStore::new();

        store.append(vec![draft(Month::Mar, 1.0)]);
        let created = store.append(vec![draft(Month::Jan, 2.0), draft(Month::Feb, 3.0)]);

        assert_eq!(created.len(), 2);
        let months: Vec<_> = store.expenses().iter().map(|e| e.month).collect();
        assert_eq!(months, vec![Month::Mar, Month::Jan, Month::Feb]);
    }

    #[test]
    fn ids_are_unique_across_appends_and_replacements() {
        let mut store = ExpenseStore::new();
        let mut seen = HashSet::new();

        for expense in store.append(vec![draft(Month::Jan, 1.0), draft(Month::Feb, 1.0)]) {
            assert!(seen.insert(expense.id));
        }

        store.replace_all(vec![draft(Month::Mar, 1.0)]);
        for expense in store.expenses() {
            assert!(seen.insert(expense.id), "ID {} was reused", expense.id);
        }

        for expense in store.append(vec![draft(Month::Apr, 1.0)]) {
            assert!(seen.insert(expense.id), "ID {} was reused", expense.id);
        }
    }

    #[test]
    fn replace_all_with_nothing_clears_the_store() {
        let mut store = ExpenseStore::new();
        store.append(vec![draft(Month::Jan, 1.0)]);

        store.replace_all(Vec::new());

        assert!(store.is_empty());
    }

    #[test]
    fn append_nothing_is_a_no_op() {
        let mut store = ExpenseStore::new();
        store.append(vec![draft(Month::Jan, 1.0)]);

        let created = store.append(Vec::new());

        assert!(created.is_empty());
        assert_eq!(store.len(), 1);
    }
}
