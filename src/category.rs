//! The recommended expense categories and their display colours.
//!
//! Categories are free text: the ledger accepts any non-empty label. This table
//! only gives clients a consistent colour for the common categories and a
//! fallback colour for everything else.

use axum::Json;
use serde::Serialize;

/// The colour used for categories that are not in [KnownCategory::ALL].
pub const FALLBACK_COLOR: &str = "#6b7280";

/// One of the recommended expense categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownCategory {
    /// Groceries, eating out, etc.
    Food,
    /// Fuel, fares, parking, etc.
    Transport,
    /// Clothes, gadgets, gifts, etc.
    Shopping,
    /// Rent, power, phone, etc.
    Bills,
    /// Anything else.
    Other,
}

impl KnownCategory {
    /// Every known category in display order.
    pub const ALL: [KnownCategory; 5] = [
        KnownCategory::Food,
        KnownCategory::Transport,
        KnownCategory::Shopping,
        KnownCategory::Bills,
        KnownCategory::Other,
    ];

    /// Find the known category with the label `label`, matched exactly.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == label)
    }

    /// The label stored on expenses in this category.
    pub fn label(self) -> &'static str {
        match self {
            KnownCategory::Food => "Food",
            KnownCategory::Transport => "Transport",
            KnownCategory::Shopping => "Shopping",
            KnownCategory::Bills => "Bills",
            KnownCategory::Other => "Other",
        }
    }

    /// The hex colour for the category.
    pub fn color(self) -> &'static str {
        match self {
            KnownCategory::Food => "#f97316",
            KnownCategory::Transport => "#3b82f6",
            KnownCategory::Shopping => "#ec4899",
            KnownCategory::Bills => "#ef4444",
            KnownCategory::Other => "#8b5cf6",
        }
    }
}

/// The hex colour for the category `label`, or [FALLBACK_COLOR] for unknown labels.
pub fn category_color(label: &str) -> &'static str {
    KnownCategory::from_label(label)
        .map(KnownCategory::color)
        .unwrap_or(FALLBACK_COLOR)
}

/// A category label paired with its colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    /// The category label.
    pub name: &'static str,
    /// The hex colour for the category.
    pub color: &'static str,
}

/// A route handler that lists the known categories and their colours.
pub async fn get_categories_endpoint() -> Json<Vec<CategoryInfo>> {
    let categories = KnownCategory::ALL
        .into_iter()
        .map(|category| CategoryInfo {
            name: category.label(),
            color: category.color(),
        })
        .collect();

    Json(categories)
}

#[cfg(test)]
mod tests {
    use crate::category::{FALLBACK_COLOR, KnownCategory, category_color};

    #[test]
    fn labels_round_trip() {
        for category in KnownCategory::ALL {
            assert_eq!(KnownCategory::from_label(category.label()), Some(category));
        }
    }

    #[test]
    fn unknown_labels_use_fallback_color() {
        assert_eq!(category_color("Hobbies"), FALLBACK_COLOR);
        assert_eq!(category_color("food"), FALLBACK_COLOR);
        assert_eq!(category_color("Food"), "#f97316");
    }
}
