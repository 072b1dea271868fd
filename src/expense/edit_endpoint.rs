//! Defines the endpoint for replacing the fields of an existing expense.

use axum::{Json, extract::State};

use crate::{
    Error,
    expense::{Expense, ExpenseCandidate, ExpenseId, LedgerState},
    extract::{JsonBody, PathParam},
};

/// A route handler for replacing every field of an expense, keeping its ID.
///
/// Responds with `404 Not Found` if no expense has the ID, otherwise with
/// `400 Bad Request` if the candidate is invalid.
pub async fn edit_expense_endpoint(
    State(state): State<LedgerState>,
    PathParam(expense_id): PathParam<ExpenseId>,
    JsonBody(candidate): JsonBody<ExpenseCandidate>,
) -> Result<Json<Expense>, Error> {
    let expense = state
        .lock()?
        .update(expense_id, &candidate)
        .inspect_err(|error| tracing::debug!("could not update expense {expense_id}: {error}"))?;

    Ok(Json(expense))
}
