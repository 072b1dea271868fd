//! The read-only endpoints that summarise the ledger for charts and dashboards.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use serde::Deserialize;

use crate::{
    AppState, Error, Ledger,
    aggregation::{MonthlyReport, Period, SummaryReport},
    expense::{Expense, LedgerState},
    extract::QueryParams,
    timezone::local_today,
};

/// The state needed by the summary endpoints.
#[derive(Debug, Clone)]
pub struct SummaryState {
    /// The ledger to summarise.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for SummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

impl SummaryState {
    /// Copy every expense out of the ledger so that the lock is not held while aggregating.
    fn snapshot(&self) -> Result<Vec<Expense>, Error> {
        LedgerState {
            ledger: self.ledger.clone(),
        }
        .lock()?
        .read_all()
    }
}

/// A route handler for the all-time summary, using today's date in the server's timezone
/// as the current month.
pub async fn get_summary_endpoint(
    State(state): State<SummaryState>,
) -> Result<Json<SummaryReport>, Error> {
    let today = local_today(&state.local_timezone)?;
    let snapshot = state.snapshot()?;

    Ok(Json(SummaryReport::build(&snapshot, today)))
}

/// The query parameters for the monthly summary.
///
/// Missing parameters default to the current month or year.
#[derive(Debug, Default, Deserialize)]
pub struct MonthlyQuery {
    /// The month number, 1-12.
    pub month: Option<u8>,
    /// The calendar year, e.g. 2024.
    pub year: Option<i32>,
}

/// A route handler for the category breakdown of a single month.
///
/// Responds with `400 Bad Request` if the month is not in 1-12.
pub async fn get_monthly_summary_endpoint(
    State(state): State<SummaryState>,
    QueryParams(query): QueryParams<MonthlyQuery>,
) -> Result<Json<MonthlyReport>, Error> {
    let period = resolve_period(&query, &state.local_timezone)?;
    let snapshot = state.snapshot()?;

    Ok(Json(MonthlyReport::build(&snapshot, period)))
}

fn resolve_period(query: &MonthlyQuery, local_timezone: &str) -> Result<Period, Error> {
    if let (Some(month), Some(year)) = (query.month, query.year) {
        return Period::new(year, month);
    }

    let current = Period::containing(local_today(local_timezone)?);
    Period::new(
        query.year.unwrap_or(current.year()),
        query.month.unwrap_or(u8::from(current.month())),
    )
}
