//! Percentage breakdowns and summary statistics.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    aggregation::{category_totals, total_spent},
    expense::Expense,
};

/// A category's share of the spending in a period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    /// The category label.
    pub category: String,
    /// The sum of the category's prices.
    pub total: f64,
    /// The category's percentage of the overall total, rounded to one decimal place.
    pub percentage: f64,
}

/// Summary statistics over a set of expenses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallStatistics {
    /// The sum of all prices.
    pub total_spent: f64,
    /// The number of expenses.
    pub transaction_count: usize,
    /// `total_spent / transaction_count`, or zero when there are no expenses.
    pub average_per_transaction: f64,
    /// The number of distinct categories.
    pub category_count: usize,
    /// The largest category total, or zero when there are no expenses.
    pub max_category_total: f64,
    /// `total_spent / category_count`, or zero when there are no categories.
    pub average_per_category: f64,
}

/// Calculate each category's percentage of the sum of `category_totals`.
///
/// Shares are ordered by total, largest first, with ties ordered by category
/// name.
///
/// # Returns
/// An empty list if the sum of `category_totals` is zero or not finite, so
/// that no percentage is ever NaN.
pub fn percentage_breakdown(category_totals: &BTreeMap<String, f64>) -> Vec<CategoryShare> {
    let period_total: f64 = category_totals.values().sum();

    if !period_total.is_finite() || period_total <= 0.0 {
        return Vec::new();
    }

    let mut shares: Vec<CategoryShare> = category_totals
        .iter()
        .map(|(category, &total)| CategoryShare {
            category: category.clone(),
            total,
            percentage: round_to_one_decimal(100.0 * total / period_total),
        })
        .collect();

    // Stable sort over the name ordered map gives the name tie-break.
    shares.sort_by(|a, b| b.total.total_cmp(&a.total));
    shares
}

fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Calculate the totals and averages of `expenses`.
///
/// Every average is zero rather than NaN when its divisor is zero.
pub fn overall_statistics(expenses: &[Expense]) -> OverallStatistics {
    let total = total_spent(expenses);
    let totals_by_category = category_totals(expenses);
    let transaction_count = expenses.len();
    let category_count = totals_by_category.len();

    let average_per_transaction = if transaction_count > 0 {
        total / transaction_count as f64
    } else {
        0.0
    };

    let average_per_category = if category_count > 0 {
        total / category_count as f64
    } else {
        0.0
    };

    let max_category_total = totals_by_category.values().copied().fold(0.0, f64::max);

    OverallStatistics {
        total_spent: total,
        transaction_count,
        average_per_transaction,
        category_count,
        max_category_total,
        average_per_category,
    }
}
