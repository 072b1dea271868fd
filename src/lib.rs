//! Expense Ledger is a small service for tracking personal spending.
//!
//! This library provides an in-memory (or SQLite backed) ledger of expenses,
//! pure aggregation functions for summarising them, and a JSON REST API that
//! exposes both.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

pub mod aggregation;
mod app_state;
pub mod category;
pub mod endpoints;
mod error;
pub mod expense;
pub mod extract;
mod ledger;
mod logging;
mod routing;
mod summary;
mod timezone;

pub use app_state::AppState;
pub use error::{Error, Field};
pub use ledger::{
    ExpenseStore, Ledger, MemoryExpenseStore, SQLiteExpenseStore, create_expense_table,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use summary::{
    MonthlyQuery, SummaryState, get_monthly_summary_endpoint, get_summary_endpoint,
};
pub use timezone::{get_local_offset, local_today};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
