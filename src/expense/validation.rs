//! Checks candidate expenses against the field constraints of the ledger.
//!
//! Validation is pure: the same candidate always gets the same verdict.

use time::{
    Date, OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description,
};

use crate::{
    Error,
    error::Field,
    expense::{ExpenseCandidate, NewExpense, PriceInput},
};

/// Validate and normalize `candidate`.
///
/// Text fields are trimmed, the price is parsed and the date has any
/// time-of-day component dropped.
///
/// # Errors
/// Returns [Error::Validation] naming the first field that is invalid, checked
/// in the order item name, price, date, category.
pub fn validate_expense(candidate: &ExpenseCandidate) -> Result<NewExpense, Error> {
    let item_name = non_empty_text(&candidate.item_name, Field::ItemName)?;
    let item_price = parse_price(candidate.item_price.as_ref())?;
    let date_of_purchase = parse_date(&candidate.date_of_purchase)?;
    let category = non_empty_text(&candidate.category, Field::Category)?;

    Ok(NewExpense {
        item_name,
        item_price,
        date_of_purchase,
        category,
    })
}

fn non_empty_text(text: &str, field: Field) -> Result<String, Error> {
    let text = text.trim();

    if text.is_empty() {
        Err(Error::validation(field, "cannot be empty"))
    } else {
        Ok(text.to_owned())
    }
}

/// The largest accepted price.
///
/// Sums of many prices this size stay far below `f64::MAX`, so totals and
/// percentages computed from valid expenses are always finite.
pub const MAX_PRICE: f64 = 1e12;

/// Parse a price, which must be a finite number from zero to [MAX_PRICE].
///
/// Negative zero is stored as zero.
///
/// # Errors
/// Returns [Error::Validation] for [Field::ItemPrice] if the price is missing,
/// not a number, infinite, NaN, negative or greater than [MAX_PRICE].
pub fn parse_price(price: Option<&PriceInput>) -> Result<f64, Error> {
    let price = match price {
        None => return Err(Error::validation(Field::ItemPrice, "is required")),
        Some(PriceInput::Number(number)) => *number,
        Some(PriceInput::Text(text)) => text.trim().parse::<f64>().map_err(|_| {
            Error::validation(Field::ItemPrice, format!("\"{text}\" is not a number"))
        })?,
    };

    if !price.is_finite() {
        return Err(Error::validation(Field::ItemPrice, "must be a finite number"));
    }

    if price < 0.0 {
        return Err(Error::validation(
            Field::ItemPrice,
            format!("{price} is negative, prices must be zero or greater"),
        ));
    }

    if price > MAX_PRICE {
        return Err(Error::validation(
            Field::ItemPrice,
            format!("{price} is too large, prices must be at most {MAX_PRICE}"),
        ));
    }

    // Adding positive zero turns -0.0 into 0.0 and leaves every other value unchanged.
    Ok(price + 0.0)
}

/// Parse a purchase date from either `YYYY-MM-DD` or an RFC 3339 date-time.
///
/// For date-times, only the date part (in the date-time's own offset) is kept.
///
/// # Errors
/// Returns [Error::Validation] for [Field::DateOfPurchase] if `text` is not a
/// valid calendar date in either format.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    let text = text.trim();

    if text.is_empty() {
        return Err(Error::validation(Field::DateOfPurchase, "is required"));
    }

    if let Ok(date) = Date::parse(text, format_description!("[year]-[month]-[day]")) {
        return Ok(date);
    }

    OffsetDateTime::parse(text, &Rfc3339)
        .map(|date_time| date_time.date())
        .map_err(|_| {
            Error::validation(
                Field::DateOfPurchase,
                format!("\"{text}\" is not a valid date, expected YYYY-MM-DD"),
            )
        })
}
