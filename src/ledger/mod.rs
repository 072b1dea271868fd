//! The ledger: the authoritative record of every expense.
//!
//! [Ledger] validates candidate expenses and delegates storage to an
//! [ExpenseStore]. Stores only ever see validated data, and every read hands
//! back owned values so callers cannot alias ledger state.

mod memory;
mod sqlite;

pub use memory::MemoryExpenseStore;
pub use sqlite::{SQLiteExpenseStore, create_expense_table};

use std::fmt::Debug;

use crate::{
    Error,
    expense::{Expense, ExpenseCandidate, ExpenseId, NewExpense, validate_expense},
};

/// Handles the storage and retrieval of validated expenses.
///
/// Implementers must:
/// - assign IDs that are never reused, even after the expense is removed,
/// - apply each write fully or not at all,
/// - return expenses from [ExpenseStore::get_all] in insertion order.
pub trait ExpenseStore: Debug + Send {
    /// Store a new expense and assign it an ID.
    fn insert(&mut self, expense: NewExpense) -> Result<Expense, Error>;

    /// Retrieve an expense by its `id`.
    ///
    /// Implementers should return [Error::NotFound] if `id` does not refer to
    /// a stored expense.
    fn get(&self, id: ExpenseId) -> Result<Expense, Error>;

    /// Retrieve every stored expense in insertion order.
    fn get_all(&self) -> Result<Vec<Expense>, Error>;

    /// Replace all fields of the expense `id` with `expense`, keeping the ID.
    ///
    /// Implementers should return [Error::NotFound] if `id` does not refer to
    /// a stored expense.
    fn replace(&mut self, id: ExpenseId, expense: NewExpense) -> Result<Expense, Error>;

    /// Remove the expense `id` and return it.
    ///
    /// Implementers should return [Error::NotFound] if `id` does not refer to
    /// a stored expense.
    fn remove(&mut self, id: ExpenseId) -> Result<Expense, Error>;
}

/// The authoritative set of expense records.
#[derive(Debug)]
pub struct Ledger {
    store: Box<dyn ExpenseStore>,
}

impl Ledger {
    /// Create a ledger over `store`.
    ///
    /// The ledger starts with whatever the store already holds.
    pub fn new(store: impl ExpenseStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Create an empty ledger that keeps expenses in memory.
    pub fn in_memory() -> Self {
        Self::new(MemoryExpenseStore::default())
    }

    /// Validate `candidate` and add it to the ledger with a fresh ID.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::Validation] if `candidate` has an invalid field,
    /// - or an error from the underlying store.
    ///
    /// The ledger is unchanged when an error is returned.
    pub fn create(&mut self, candidate: &ExpenseCandidate) -> Result<Expense, Error> {
        let new_expense = validate_expense(candidate)?;
        let expense = self.store.insert(new_expense)?;

        tracing::info!(
            "Created expense {} ({}, {})",
            expense.id,
            expense.category,
            expense.item_price
        );

        Ok(expense)
    }

    /// Take a snapshot of every expense in insertion order.
    ///
    /// Repeated calls return identical snapshots until the next mutation.
    ///
    /// # Errors
    /// Returns an error if the underlying store fails.
    pub fn read_all(&self) -> Result<Vec<Expense>, Error> {
        let expenses = self.store.get_all()?;
        tracing::debug!("Read {} expenses from the ledger", expenses.len());

        Ok(expenses)
    }

    /// Retrieve a single expense by its `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to an expense.
    pub fn get(&self, id: ExpenseId) -> Result<Expense, Error> {
        self.store.get(id)
    }

    /// Replace every field of the expense `id` with the fields of `candidate`.
    ///
    /// The existence of `id` is checked before `candidate` is validated.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to an expense,
    /// - [Error::Validation] if `candidate` has an invalid field,
    /// - or an error from the underlying store.
    ///
    /// The ledger is unchanged when an error is returned.
    pub fn update(
        &mut self,
        id: ExpenseId,
        candidate: &ExpenseCandidate,
    ) -> Result<Expense, Error> {
        self.store.get(id)?;
        let new_expense = validate_expense(candidate)?;
        let expense = self.store.replace(id, new_expense)?;

        tracing::info!("Updated expense {id}");

        Ok(expense)
    }

    /// Remove the expense `id` and return the removed value.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if `id` does not refer to an expense.
    pub fn delete(&mut self, id: ExpenseId) -> Result<Expense, Error> {
        let expense = self.store.remove(id)?;

        tracing::info!("Deleted expense {id}");

        Ok(expense)
    }
}
