//! Bundles of aggregates computed from a single snapshot.
//!
//! Computing every aggregate of a report from one snapshot guarantees that,
//! e.g., the category totals and monthly totals of a report agree with each
//! other even if the ledger changes while the report is being built.

use std::collections::BTreeMap;

use serde::Serialize;
use time::Date;

use crate::{
    aggregation::{
        CategoryShare, MonthKey, OverallStatistics, Period, PeriodStatistics, category_totals,
        filter_by_period, monthly_totals, overall_statistics, percentage_breakdown,
        period_statistics, recent_expenses, top_expenses,
    },
    expense::Expense,
};

/// How many expenses the summary lists as top and recent expenses.
pub const SUMMARY_LIST_LENGTH: usize = 5;

/// The statistics of the month containing the reference date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentMonth {
    /// The month the statistics are for.
    pub period: Period,
    /// Total, count and daily average of the month so far.
    #[serde(flatten)]
    pub statistics: PeriodStatistics,
}

/// The all-time overview of the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    /// Total spending per category.
    pub category_totals: BTreeMap<String, f64>,
    /// Total spending per month, oldest first.
    pub monthly_totals: BTreeMap<MonthKey, f64>,
    /// The most expensive expenses.
    pub top_expenses: Vec<Expense>,
    /// The most recently purchased expenses.
    pub recent_expenses: Vec<Expense>,
    /// Statistics for the month containing the reference date.
    pub current_month: CurrentMonth,
    /// Totals and averages over every expense.
    pub overall: OverallStatistics,
}

impl SummaryReport {
    /// Build the summary of `snapshot` as of `today`.
    pub fn build(snapshot: &[Expense], today: Date) -> Self {
        let period = Period::containing(today);
        let this_month = filter_by_period(snapshot, period);

        Self {
            category_totals: category_totals(snapshot),
            monthly_totals: monthly_totals(snapshot),
            top_expenses: top_expenses(snapshot, SUMMARY_LIST_LENGTH),
            recent_expenses: recent_expenses(snapshot, SUMMARY_LIST_LENGTH),
            current_month: CurrentMonth {
                period,
                statistics: period_statistics(&this_month, today),
            },
            overall: overall_statistics(snapshot),
        }
    }
}

/// The spending of a single month, broken down by category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyReport {
    /// The month the report covers.
    pub period: Period,
    /// Total spending per category in the month.
    pub category_totals: BTreeMap<String, f64>,
    /// Each category's share of the month's spending, largest first.
    pub breakdown: Vec<CategoryShare>,
    /// Totals and averages over the month's expenses.
    pub statistics: OverallStatistics,
}

impl MonthlyReport {
    /// Build the report for `period` from `snapshot`.
    pub fn build(snapshot: &[Expense], period: Period) -> Self {
        let expenses = filter_by_period(snapshot, period);
        let totals = category_totals(&expenses);

        Self {
            period,
            breakdown: percentage_breakdown(&totals),
            statistics: overall_statistics(&expenses),
            category_totals: totals,
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::aggregation::{
        MonthKey, MonthlyReport, Period, SummaryReport, test_utils::create_test_expense,
    };

    fn example_snapshot() -> Vec<crate::expense::Expense> {
        vec![
            create_test_expense(1, 100.0, date!(2024 - 01 - 05), "Food"),
            create_test_expense(2, 50.0, date!(2024 - 01 - 20), "Food"),
            create_test_expense(3, 30.0, date!(2024 - 02 - 01), "Transport"),
        ]
    }

    #[test]
    fn summary_report_matches_example() {
        let report = SummaryReport::build(&example_snapshot(), date!(2024 - 02 - 10));

        assert_eq!(report.category_totals["Food"], 150.0);
        assert_eq!(report.category_totals["Transport"], 30.0);
        assert_eq!(report.monthly_totals[&MonthKey::new(2024, 1)], 150.0);
        assert_eq!(report.monthly_totals[&MonthKey::new(2024, 2)], 30.0);
        assert_eq!(
            report.top_expenses.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            report.recent_expenses.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![3, 2, 1]
        );
        assert_eq!(report.current_month.period, Period::new(2024, 2).unwrap());
        assert_eq!(report.current_month.statistics.total, 30.0);
        assert_eq!(report.current_month.statistics.count, 1);
        assert_eq!(report.current_month.statistics.daily_average, 3.0);
        assert_eq!(report.overall.average_per_transaction, 60.0);
    }

    #[test]
    fn summary_report_of_empty_snapshot_is_all_zero() {
        let report = SummaryReport::build(&[], date!(2024 - 02 - 10));

        assert!(report.category_totals.is_empty());
        assert!(report.monthly_totals.is_empty());
        assert!(report.top_expenses.is_empty());
        assert!(report.recent_expenses.is_empty());
        assert_eq!(report.current_month.statistics.daily_average, 0.0);
        assert_eq!(report.overall.average_per_transaction, 0.0);
        assert_eq!(report.overall.average_per_category, 0.0);
    }

    #[test]
    fn summary_report_limits_lists_to_five() {
        let snapshot: Vec<_> = (1..=8)
            .map(|id| create_test_expense(id, id as f64, date!(2024 - 01 - 01), "Food"))
            .collect();

        let report = SummaryReport::build(&snapshot, date!(2024 - 01 - 31));

        assert_eq!(report.top_expenses.len(), 5);
        assert_eq!(report.recent_expenses.len(), 5);
        assert_eq!(report.top_expenses[0].id, 8);
    }

    #[test]
    fn monthly_report_only_covers_its_period() {
        let report = MonthlyReport::build(&example_snapshot(), Period::new(2024, 1).unwrap());

        assert_eq!(report.category_totals.len(), 1);
        assert_eq!(report.category_totals["Food"], 150.0);
        assert_eq!(report.breakdown.len(), 1);
        assert_eq!(report.breakdown[0].percentage, 100.0);
        assert_eq!(report.statistics.transaction_count, 2);
        assert_eq!(report.statistics.max_category_total, 150.0);
        assert_eq!(report.statistics.average_per_category, 150.0);
    }

    #[test]
    fn monthly_report_of_empty_period_is_empty() {
        let report = MonthlyReport::build(&example_snapshot(), Period::new(2023, 7).unwrap());

        assert!(report.category_totals.is_empty());
        assert!(report.breakdown.is_empty());
        assert_eq!(report.statistics.total_spent, 0.0);
        assert_eq!(report.statistics.average_per_category, 0.0);
    }

    #[test]
    fn summary_report_serializes_month_keys_as_text() {
        let report = SummaryReport::build(&example_snapshot(), date!(2024 - 02 - 10));

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["monthly_totals"]["2024-01"], 150.0);
        assert_eq!(json["current_month"]["period"]["month"], 2);
        assert_eq!(json["current_month"]["daily_average"], 3.0);
    }
}
