//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use crate::Ledger;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The ledger holding every expense.
    ///
    /// The mutex serializes mutations, so concurrent requests touching the
    /// same expense are applied one at a time (the last one wins).
    pub ledger: Arc<Mutex<Ledger>>,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// Used to decide which month is the "current" month.
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] that owns `ledger`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    pub fn new(ledger: Ledger, local_timezone: &str) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
            local_timezone: local_timezone.to_owned(),
        }
    }
}
