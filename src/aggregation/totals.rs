//! Groups expenses by category and by month.

use std::{collections::BTreeMap, fmt::Display};

use serde::{Serialize, Serializer};
use time::Date;

use crate::expense::Expense;

/// A calendar month used as the key of [monthly_totals].
///
/// Keys order chronologically and display as zero padded `YYYY-MM`, so sorting
/// the displayed keys as text gives the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u8,
}

impl MonthKey {
    /// Create a key for `month` (1-12) of `year`.
    pub fn new(year: i32, month: u8) -> Self {
        Self { year, month }
    }

    /// The month that `date` falls in.
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: u8::from(date.month()),
        }
    }

    /// The year of the key.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month number (1-12) of the key.
    pub fn month(&self) -> u8 {
        self.month
    }
}

impl Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The sum of the prices of `expenses`.
pub fn total_spent(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.item_price).sum()
}

/// Sums expense prices by category.
///
/// # Returns
/// Map of each category present in `expenses` to the sum of its prices.
/// Categories without expenses are absent rather than zero.
pub fn category_totals(expenses: &[Expense]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();

    for expense in expenses {
        *totals.entry(expense.category.clone()).or_insert(0.0) += expense.item_price;
    }

    totals
}

/// Sums expense prices by month of purchase.
///
/// # Returns
/// Map of each month with at least one expense to the sum of its prices,
/// iterating in ascending chronological order.
pub fn monthly_totals(expenses: &[Expense]) -> BTreeMap<MonthKey, f64> {
    let mut totals = BTreeMap::new();

    for expense in expenses {
        let month = MonthKey::from_date(expense.date_of_purchase);
        *totals.entry(month).or_insert(0.0) += expense.item_price;
    }

    totals
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::aggregation::{
        MonthKey, category_totals, monthly_totals, test_utils::create_test_expense, total_spent,
    };

    #[test]
    fn category_totals_sums_by_category() {
        let expenses = vec![
            create_test_expense(1, 100.0, date!(2024 - 01 - 05), "Food"),
            create_test_expense(2, 50.0, date!(2024 - 01 - 20), "Food"),
            create_test_expense(3, 30.0, date!(2024 - 02 - 01), "Transport"),
        ];

        let result = category_totals(&expenses);

        assert_eq!(result.len(), 2);
        assert_eq!(result["Food"], 150.0);
        assert_eq!(result["Transport"], 30.0);
    }

    #[test]
    fn category_totals_handles_empty_input() {
        assert!(category_totals(&[]).is_empty());
    }

    #[test]
    fn category_totals_keeps_unknown_categories() {
        let expenses = vec![create_test_expense(1, 8.0, date!(2024 - 01 - 05), "Hobbies")];

        assert_eq!(category_totals(&expenses)["Hobbies"], 8.0);
    }

    #[test]
    fn category_totals_sum_to_total_spent() {
        let categories = ["Food", "Transport", "Shopping", "Bills", "Other", "Pets"];
        let expenses: Vec<_> = (0..60)
            .map(|i| {
                create_test_expense(
                    i,
                    (i as f64) * 1.37 + 0.01,
                    date!(2024 - 01 - 01),
                    categories[i as usize % categories.len()],
                )
            })
            .collect();

        let sum_of_totals: f64 = category_totals(&expenses).values().sum();

        assert!((sum_of_totals - total_spent(&expenses)).abs() < 1e-9);
    }

    #[test]
    fn monthly_totals_sums_by_month() {
        let expenses = vec![
            create_test_expense(1, 100.0, date!(2024 - 01 - 05), "Food"),
            create_test_expense(2, 50.0, date!(2024 - 01 - 20), "Food"),
            create_test_expense(3, 30.0, date!(2024 - 02 - 01), "Transport"),
        ];

        let result = monthly_totals(&expenses);

        assert_eq!(result.len(), 2);
        assert_eq!(result[&MonthKey::new(2024, 1)], 150.0);
        assert_eq!(result[&MonthKey::new(2024, 2)], 30.0);
    }

    #[test]
    fn monthly_totals_are_chronological() {
        let expenses = vec![
            create_test_expense(1, 1.0, date!(2024 - 11 - 05), "Food"),
            create_test_expense(2, 2.0, date!(2023 - 12 - 31), "Food"),
            create_test_expense(3, 3.0, date!(2024 - 02 - 01), "Food"),
            create_test_expense(4, 4.0, date!(2024 - 10 - 01), "Food"),
        ];

        let keys: Vec<String> = monthly_totals(&expenses)
            .keys()
            .map(|key| key.to_string())
            .collect();
        let mut sorted_as_text = keys.clone();
        sorted_as_text.sort();

        assert_eq!(keys, vec!["2023-12", "2024-02", "2024-10", "2024-11"]);
        assert_eq!(keys, sorted_as_text);
    }

    #[test]
    fn month_key_serializes_as_text() {
        let totals = monthly_totals(&[create_test_expense(1, 2.5, date!(2024 - 03 - 09), "Food")]);

        assert_eq!(
            serde_json::to_string(&totals).unwrap(),
            r#"{"2024-03":2.5}"#
        );
    }
}
