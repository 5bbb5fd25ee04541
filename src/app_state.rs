//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use crate::expense::{Currency, ExpenseStore};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every expense logged since the server started.
    pub expenses: Arc<Mutex<ExpenseStore>>,

    /// The currency selected by default in the expense form.
    pub default_currency: Currency,
}

impl AppState {
    /// Create a new [AppState] with an empty expense store.
    pub fn new(default_currency: Currency) -> Self {
        Self {
            expenses: Arc::new(Mutex::new(ExpenseStore::new())),
            default_currency,
        }
    }
}
