//! Defines the endpoints for reading expenses.

use axum::{Json, extract::State};

use crate::{
    Error,
    expense::{Expense, ExpenseId, LedgerState},
    extract::PathParam,
};

/// A route handler that lists every expense in insertion order.
pub async fn get_expenses_endpoint(
    State(state): State<LedgerState>,
) -> Result<Json<Vec<Expense>>, Error> {
    let expenses = state.lock()?.read_all()?;

    Ok(Json(expenses))
}

/// A route handler for getting a single expense by its ID.
///
/// Responds with `404 Not Found` if no expense has the ID.
pub async fn get_expense_endpoint(
    State(state): State<LedgerState>,
    PathParam(expense_id): PathParam<ExpenseId>,
) -> Result<Json<Expense>, Error> {
    let expense = state.lock()?.get(expense_id)?;

    Ok(Json(expense))
}
