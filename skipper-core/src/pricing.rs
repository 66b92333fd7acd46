//! Price derivation for skip offerings.

use std::fmt;

use crate::model::SkipOffering;

/// Total price including VAT, rounded to whole pounds.
///
/// Inputs are not validated; zero or negative values pass straight through the formula.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "whole-pound totals stay far inside the i64 range"
)]
pub fn total_price(price_before_vat: f64, vat_percent: f64) -> i64 {
    (price_before_vat * (1.0 + vat_percent / 100.0)).round() as i64
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Displayable price parts of a single offering.
pub struct PriceBreakdown {
    /// VAT-inclusive total in whole pounds.
    pub total: i64,
    /// Price before VAT.
    pub before_vat: f64,
    /// VAT percentage points.
    pub vat_percent: f64,
}

impl PriceBreakdown {
    /// Derive the breakdown for an offering.
    #[must_use]
    pub fn of(offering: &SkipOffering) -> Self {
        Self {
            total: total_price(offering.price_before_vat, offering.vat),
            before_vat: offering.price_before_vat,
            vat_percent: offering.vat,
        }
    }

    /// Total formatted as a currency amount, e.g. `£240`.
    #[must_use]
    pub fn total_label(&self) -> String {
        format!("£{}", self.total)
    }

    /// Pre-VAT explanation, e.g. `(£200 ex VAT + 20% VAT)`.
    #[must_use]
    pub fn detail_label(&self) -> String {
        format!("(£{} ex VAT + {}% VAT)", self.before_vat, self.vat_percent)
    }
}

impl fmt::Display for PriceBreakdown {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {}", self.total_label(), self.detail_label())
    }
}
