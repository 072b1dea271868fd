//! Implements an in-memory expense store.

use crate::{
    Error,
    expense::{Expense, ExpenseId, NewExpense},
    ledger::ExpenseStore,
};

/// Stores expenses in a [Vec], in insertion order.
///
/// IDs come from a counter that only ever increases, so the ID of a removed
/// expense is never handed out again.
#[derive(Debug, Default, Clone)]
pub struct MemoryExpenseStore {
    expenses: Vec<Expense>,
    last_id: ExpenseId,
}

impl MemoryExpenseStore {
    fn position(&self, id: ExpenseId) -> Result<usize, Error> {
        self.expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(Error::NotFound)
    }
}

impl ExpenseStore for MemoryExpenseStore {
    fn insert(&mut self, expense: NewExpense) -> Result<Expense, Error> {
        self.last_id += 1;
        let expense = expense.into_expense(self.last_id);
        self.expenses.push(expense.clone());

        Ok(expense)
    }

    fn get(&self, id: ExpenseId) -> Result<Expense, Error> {
        let index = self.position(id)?;

        Ok(self.expenses[index].clone())
    }

    fn get_all(&self) -> Result<Vec<Expense>, Error> {
        Ok(self.expenses.clone())
    }

    fn replace(&mut self, id: ExpenseId, expense: NewExpense) -> Result<Expense, Error> {
        let index = self.position(id)?;
        let expense = expense.into_expense(id);
        self.expenses[index] = expense.clone();

        Ok(expense)
    }

    fn remove(&mut self, id: ExpenseId) -> Result<Expense, Error> {
        let index = self.position(id)?;

        // `remove` rather than `swap_remove` keeps the remaining expenses in insertion order.
        Ok(self.expenses.remove(index))
    }
}
