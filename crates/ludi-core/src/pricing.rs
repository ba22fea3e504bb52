//! Display price calculation.
//!
//! Discounts are percentages applied to the base price. The calculator does
//! not range-check them: a discount above 100 produces a negative final price.
//! Range enforcement happens once, when raw records are normalized.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Price as shown to a visitor, derived from a base price and optional discount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComputedPrice {
    pub original: f64,
    #[serde(rename = "final")]
    pub final_price: f64,
    pub has_discount: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
}

/// Compute the display price for `price` with an optional percentage `discount`.
///
/// A missing, zero, or NaN discount means "no discount": the final price equals
/// the original and `discount_percentage` is `None`.
#[must_use]
pub fn calculate_price(price: f64, discount: Option<f64>) -> ComputedPrice {
    match discount {
        Some(pct) if pct != 0.0 && !pct.is_nan() => ComputedPrice {
            original: price,
            final_price: price - price * (pct / 100.0),
            has_discount: true,
            discount_percentage: Some(pct),
        },
        _ => ComputedPrice {
            original: price,
            final_price: price,
            has_discount: false,
            discount_percentage: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_discount_keeps_price() {
        let price = calculate_price(1499.0, None);
        assert_eq!(
            price,
            ComputedPrice {
                original: 1499.0,
                final_price: 1499.0,
                has_discount: false,
                discount_percentage: None,
            }
        );
    }

    #[test]
    fn zero_and_nan_discounts_are_ignored() {
        for discount in [Some(0.0), Some(f64::NAN)] {
            let price = calculate_price(80.0, discount);
            assert!(!price.has_discount);
            assert!((price.final_price - 80.0).abs() < f64::EPSILON);
            assert!(price.discount_percentage.is_none());
        }
    }

    #[test]
    fn discount_applies_percentage() {
        let price = calculate_price(1499.0, Some(20.0));
        assert!(price.has_discount);
        assert_eq!(price.discount_percentage, Some(20.0));
        assert!((price.final_price - 1199.2).abs() < 1e-9);
    }

    #[test]
    fn discount_formula_holds_across_range() {
        for p in [0.0, 1.0, 19.99, 250.0, 1499.0] {
            for d in [0.5, 1.0, 10.0, 33.3, 50.0, 99.9, 100.0] {
                let price = calculate_price(p, Some(d));
                assert!(price.has_discount);
                assert!((price.final_price - (p - p * d / 100.0)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn full_discount_is_free() {
        let price = calculate_price(40.0, Some(100.0));
        assert!(price.final_price.abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_discount_is_not_clamped() {
        let price = calculate_price(100.0, Some(150.0));
        assert!((price.final_price + 50.0).abs() < 1e-9);
    }

    #[test]
    fn serializes_final_field_name() {
        let json = serde_json::to_value(calculate_price(10.0, Some(50.0))).unwrap();
        assert_eq!(json["final"], serde_json::json!(5.0));
        assert_eq!(json["hasDiscount"], serde_json::json!(true));
        assert_eq!(json["discountPercentage"], serde_json::json!(50.0));
    }
}
