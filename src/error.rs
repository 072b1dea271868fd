//! Defines the app level error type and its conversion to JSON error responses.
use std::fmt::Display;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// The input fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The label of an expense.
    ItemName,
    /// The amount of money spent.
    ItemPrice,
    /// The date an expense happened.
    DateOfPurchase,
    /// The category label of an expense.
    Category,
    /// The month number of a period.
    Month,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Use the same names the JSON API uses so clients can map errors to inputs.
        let name = match self {
            Field::ItemName => "itemname",
            Field::ItemPrice => "itemprice",
            Field::DateOfPurchase => "dateofpurchase",
            Field::Category => "category",
            Field::Month => "month",
        };

        write!(f, "{name}")
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A candidate expense (or period) had a field that did not pass validation.
    ///
    /// The ledger is left unchanged when this error is returned.
    #[error("invalid {field}: {reason}")]
    Validation {
        /// The offending field.
        field: Field,
        /// A human readable explanation of what is wrong with the field.
        reason: String,
    },

    /// The requested expense was not found.
    ///
    /// For HTTP request handlers, the client should check that the ID is
    /// correct and that the expense has not already been deleted.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested expense could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the ledger lock
    #[error("could not acquire the ledger lock")]
    LedgerLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The request body, path or query string could not be parsed, e.g. a
    /// malformed JSON body or a non-numeric expense ID.
    #[error("{message}")]
    InvalidRequest {
        /// The status code chosen by the rejected extractor, e.g. 400 or 415.
        status: StatusCode,
        /// Why the request could not be parsed.
        message: String,
    },
}

impl Error {
    pub(crate) fn validation(field: Field, reason: impl Into<String>) -> Self {
        Error::Validation {
            field,
            reason: reason.into(),
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        Error::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

/// The body of every error response.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::Validation { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Error::InvalidRequest { status, message } => (status, message),
            Error::InvalidTimezoneError(ref timezone) => {
                tracing::error!("Could not get local timezone \"{timezone}\"");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings \
                        and ensure the timezone has been set to a valid, canonical timezone string"
                    ),
                )
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred, check the server logs for more details."
                        .to_owned(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{Error, error::Field};

    #[test]
    fn validation_message_names_field() {
        let error = Error::validation(Field::ItemPrice, "must not be negative");

        assert_eq!(error.to_string(), "invalid itemprice: must not be negative");
    }

    #[test]
    fn no_rows_maps_to_not_found() {
        assert_eq!(
            Error::from(rusqlite::Error::QueryReturnedNoRows),
            Error::NotFound
        );
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            Error::validation(Field::ItemName, "empty")
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::LedgerLockError.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
