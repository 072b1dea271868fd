//! Expense records: the data model, validation and the JSON endpoints for
//! creating, reading, updating and deleting expenses.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod validation;

pub use core::{Expense, ExpenseCandidate, ExpenseId, NewExpense, PriceInput};
pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use edit_endpoint::edit_expense_endpoint;
pub use get_endpoint::{get_expense_endpoint, get_expenses_endpoint};
pub use validation::{MAX_PRICE, parse_date, parse_price, validate_expense};

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::FromRef;

use crate::{AppState, Error, Ledger};

/// The state needed by the expense endpoints.
#[derive(Debug, Clone)]
pub struct LedgerState {
    /// The ledger holding every expense.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for LedgerState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

impl LedgerState {
    /// Acquire exclusive access to the ledger.
    ///
    /// # Errors
    /// Returns [Error::LedgerLockError] if the lock has been poisoned.
    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, Ledger>, Error> {
        self.ledger
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire ledger lock: {error}"))
            .map_err(|_| Error::LedgerLockError)
    }
}
