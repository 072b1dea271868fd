//! Calendar month filtering and "current month" statistics.

use serde::{Serialize, ser::SerializeStruct};
use time::{Date, Month};

use crate::{
    Error,
    aggregation::total_spent,
    error::Field,
    expense::Expense,
};

/// A calendar month of a specific year, e.g. March 2024.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    year: i32,
    month: Month,
}

impl Period {
    /// Create a period from a 1-based month number and a year.
    ///
    /// # Errors
    /// Returns [Error::Validation] for [Field::Month] if `month` is not in 1-12.
    pub fn new(year: i32, month: u8) -> Result<Self, Error> {
        let month = Month::try_from(month).map_err(|_| {
            Error::validation(Field::Month, format!("{month} is not a month number (1-12)"))
        })?;

        Ok(Self { year, month })
    }

    /// The period that `date` falls in.
    pub fn containing(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The year of the period.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The month of the period.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Whether `date` falls in this period.
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl Serialize for Period {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Period", 2)?;
        state.serialize_field("year", &self.year)?;
        state.serialize_field("month", &u8::from(self.month))?;
        state.end()
    }
}

/// Totals for the expenses of a period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodStatistics {
    /// The sum of the prices in the period.
    pub total: f64,
    /// The number of expenses in the period.
    pub count: usize,
    /// The total spread over the days of the month that have passed so far.
    pub daily_average: f64,
}

/// The expenses of `expenses` that were purchased within `period`, in their original order.
pub fn filter_by_period(expenses: &[Expense], period: Period) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|expense| period.contains(expense.date_of_purchase))
        .cloned()
        .collect()
}

/// Calculate the total, count and daily average of `expenses`.
///
/// `expenses` is typically the output of [filter_by_period] for the month
/// containing `today`. The daily average divides the total by the day of the
/// month of `today`, and is zero if that day is zero.
pub fn period_statistics(expenses: &[Expense], today: Date) -> PeriodStatistics {
    let total = total_spent(expenses);
    let days_passed = today.day();

    let daily_average = if days_passed > 0 {
        total / f64::from(days_passed)
    } else {
        0.0
    };

    PeriodStatistics {
        total,
        count: expenses.len(),
        daily_average,
    }
}
