//! Defines the core data models for expenses.

use serde::{Deserialize, Serialize};
use time::Date;

/// The type used for expense IDs.
///
/// IDs are assigned by the [Ledger](crate::Ledger) and never reused, even after deletion.
pub type ExpenseId = i64;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

// ============================================================================
// MODELS
// ============================================================================

/// A discrete spending event, e.g., lunch at a cafe or a power bill.
///
/// Expenses are only created by the [Ledger](crate::Ledger), which guarantees that
/// `item_price` is finite and non-negative and that `id` is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// What the money was spent on.
    #[serde(rename = "itemname")]
    pub item_name: String,
    /// The amount of money spent.
    #[serde(rename = "itemprice")]
    pub item_price: f64,
    /// When the expense happened.
    #[serde(rename = "dateofpurchase", with = "iso_date")]
    pub date_of_purchase: Date,
    /// A free text label used to group expenses, e.g. "Food" or "Transport".
    pub category: String,
}

/// The price of a candidate expense as sent by a client.
///
/// Clients may send the price either as a JSON number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    /// A price sent as a number.
    Number(f64),
    /// A price sent as text, e.g. the raw contents of a form field.
    Text(String),
}

/// The unvalidated fields of an expense, e.g., from a create or update request.
///
/// Missing fields default to empty values so that they are reported as
/// validation errors naming the field rather than as generic parse errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCandidate {
    /// What the money was spent on.
    #[serde(rename = "itemname", default)]
    pub item_name: String,
    /// The amount of money spent.
    #[serde(rename = "itemprice", default)]
    pub item_price: Option<PriceInput>,
    /// When the expense happened as `YYYY-MM-DD` or an RFC 3339 date-time.
    #[serde(rename = "dateofpurchase", default)]
    pub date_of_purchase: String,
    /// The category label.
    #[serde(default)]
    pub category: String,
}

impl ExpenseCandidate {
    /// Create a candidate with a numeric price.
    pub fn new(item_name: &str, item_price: f64, date_of_purchase: &str, category: &str) -> Self {
        Self {
            item_name: item_name.to_owned(),
            item_price: Some(PriceInput::Number(item_price)),
            date_of_purchase: date_of_purchase.to_owned(),
            category: category.to_owned(),
        }
    }
}

impl From<&Expense> for ExpenseCandidate {
    fn from(expense: &Expense) -> Self {
        Self {
            item_name: expense.item_name.clone(),
            item_price: Some(PriceInput::Number(expense.item_price)),
            date_of_purchase: expense.date_of_purchase.to_string(),
            category: expense.category.clone(),
        }
    }
}

/// The validated fields of an expense that has not been assigned an ID yet.
///
/// Only [validate_expense](crate::expense::validate_expense) creates a `NewExpense`,
/// so stores can rely on the fields upholding the ledger's invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub(crate) item_name: String,
    pub(crate) item_price: f64,
    pub(crate) date_of_purchase: Date,
    pub(crate) category: String,
}

impl NewExpense {
    /// The trimmed item name.
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// The finite, non-negative price.
    pub fn item_price(&self) -> f64 {
        self.item_price
    }

    /// The calendar date of the purchase.
    pub fn date_of_purchase(&self) -> Date {
        self.date_of_purchase
    }

    /// The trimmed category label.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Attach `id` to the validated fields.
    pub(crate) fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            item_name: self.item_name,
            item_price: self.item_price,
            date_of_purchase: self.date_of_purchase,
            category: self.category,
        }
    }
}
