//! Orders expenses for "top" and "recent" lists.

use crate::expense::Expense;

/// The `limit` most expensive expenses, most expensive first.
///
/// Expenses with equal prices keep their order in `expenses`, so the result is
/// reproducible for a given snapshot.
pub fn top_expenses(expenses: &[Expense], limit: usize) -> Vec<Expense> {
    let mut ranked = expenses.to_vec();
    // `sort_by` is stable, which gives the tie-break on equal prices.
    ranked.sort_by(|a, b| b.item_price.total_cmp(&a.item_price));
    ranked.truncate(limit);
    ranked
}

/// The `limit` most recent expenses by purchase date, newest first.
///
/// Expenses on the same date are ordered by descending ID, i.e. the most
/// recently recorded first.
pub fn recent_expenses(expenses: &[Expense], limit: usize) -> Vec<Expense> {
    let mut ordered = expenses.to_vec();
    ordered.sort_by(|a, b| {
        b.date_of_purchase
            .cmp(&a.date_of_purchase)
            .then_with(|| b.id.cmp(&a.id))
    });
    ordered.truncate(limit);
    ordered
}
