//! Defines the endpoint for deleting an expense.

use axum::{Json, extract::State};

use crate::{
    Error,
    expense::{Expense, ExpenseId, LedgerState},
    extract::PathParam,
};

/// A route handler for deleting an expense, responds with the deleted expense.
///
/// The ID of a deleted expense is never handed out again.
pub async fn delete_expense_endpoint(
    State(state): State<LedgerState>,
    PathParam(expense_id): PathParam<ExpenseId>,
) -> Result<Json<Expense>, Error> {
    let expense = state.lock()?.delete(expense_id)?;

    Ok(Json(expense))
}
