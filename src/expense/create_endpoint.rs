//! Defines the endpoint for creating a new expense.

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    Error,
    expense::{Expense, ExpenseCandidate, LedgerState},
    extract::JsonBody,
};

/// A route handler for creating a new expense.
///
/// Responds with `201 Created` and the stored expense, including its new ID.
/// Invalid candidates are rejected with `400 Bad Request` and the ledger is
/// left unchanged.
pub async fn create_expense_endpoint(
    State(state): State<LedgerState>,
    JsonBody(candidate): JsonBody<ExpenseCandidate>,
) -> Result<(StatusCode, Json<Expense>), Error> {
    let expense = state.lock()?.create(&candidate).inspect_err(|error| {
        tracing::debug!("rejected new expense {candidate:?}: {error}");
    })?;

    Ok((StatusCode::CREATED, Json(expense)))
}
