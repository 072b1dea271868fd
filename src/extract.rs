//! Request extractors whose rejections are reported as JSON [Error] responses.
//!
//! axum's own [axum::Json], [axum::extract::Path] and [axum::extract::Query]
//! reject bad input with a plain text body. These wrappers convert the
//! rejection into an [Error] so clients always get `{"message": ...}`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::Error;

/// A JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

/// A path parameter, e.g. the ID in `/expenses/{expense_id}`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct PathParam<T>(pub T);

/// The query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct QueryParams<T>(pub T);
