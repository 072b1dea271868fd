//! Expense aggregation for summaries and charts.
//!
//! Every function here is a pure function of the snapshot it is given (see
//! [Ledger::read_all](crate::Ledger::read_all)) and, for period statistics, a
//! reference date. Nothing is cached between calls and nothing fails: empty
//! input gives empty or zero output.

mod period;
mod ranking;
mod report;
mod statistics;
mod totals;

pub use period::{Period, PeriodStatistics, filter_by_period, period_statistics};
pub use ranking::{recent_expenses, top_expenses};
pub use report::{CurrentMonth, MonthlyReport, SUMMARY_LIST_LENGTH, SummaryReport};
pub use statistics::{CategoryShare, OverallStatistics, overall_statistics, percentage_breakdown};
pub use totals::{MonthKey, category_totals, monthly_totals, total_spent};
