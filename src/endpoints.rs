//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/expenses/{expense_id}', use [format_endpoint].

/// The route for checking that the API is up.
pub const HEALTH: &str = "/test";
/// The route to list and create expenses.
pub const EXPENSES: &str = "/expenses";
/// The route to get, replace or delete a single expense.
pub const EXPENSE: &str = "/expenses/{expense_id}";
/// The route for the all-time summary of the ledger.
pub const SUMMARY: &str = "/summary";
/// The route for the category breakdown of a single month.
pub const MONTHLY_SUMMARY: &str = "/summary/monthly";
/// The route listing the known categories and their colours.
pub const CATEGORIES: &str = "/categories";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/expenses/{expense_id}', '{expense_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let param_start = match endpoint_path.find('{') {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
