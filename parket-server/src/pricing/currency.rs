//! Currency Conversion and Sale Price Derivation
//!
//! BGN/EUR conversion uses the fixed rate 1.956 and is applied once, when a
//! product is created with only one of the two price fields filled. Roll-up
//! arithmetic never converts; it always operates on already-resolved values.

use rust_decimal::Decimal;

use super::line::{sanitize, to_decimal, to_f64};

/// Fixed conversion rate: 1 EUR = 1.956 BGN
pub const EUR_TO_BGN_RATE: Decimal = Decimal::from_parts(1956, 0, 0, false, 3);

/// Convert an EUR amount to BGN, rounded to 2 decimal places
pub fn eur_to_bgn(eur: f64) -> f64 {
    to_f64(to_decimal(eur) * EUR_TO_BGN_RATE)
}

/// Convert a BGN amount to EUR, rounded to 2 decimal places
pub fn bgn_to_eur(bgn: f64) -> f64 {
    to_f64(to_decimal(bgn) / EUR_TO_BGN_RATE)
}

/// Derive the sale price from cost and markup percent.
///
/// The markup is margin-on-sale-price, so the formula is
/// `sale = cost / ((100 - markup) / 100)`, not `cost * (1 + markup / 100)`.
/// A markup of 100% or more has no finite sale price; `None` is returned
/// and the caller leaves the sale price unset.
pub fn sale_from_cost(cost: f64, markup_percent: f64) -> Option<f64> {
    if markup_percent >= 100.0 {
        tracing::warn!(
            markup_percent,
            "Markup of 100% or more has no finite sale price, skipping derivation"
        );
        return None;
    }

    let cost = sanitize(cost);
    let markup = sanitize(markup_percent);
    let hundred = Decimal::ONE_HUNDRED;
    let divisor = (hundred - markup) / hundred;

    Some(to_f64(cost / divisor))
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eur_to_bgn() {
        assert_eq!(eur_to_bgn(100.0), 195.6);
        assert_eq!(eur_to_bgn(1.0), 1.96); // 1.956 rounded half-up
        assert_eq!(eur_to_bgn(0.0), 0.0);
    }

    #[test]
    fn test_bgn_to_eur() {
        assert_eq!(bgn_to_eur(195.6), 100.0);
        assert_eq!(bgn_to_eur(1.956), 1.0);
    }

    #[test]
    fn test_round_trip_stays_within_a_cent() {
        let eur = 123.45;
        let back = bgn_to_eur(eur_to_bgn(eur));
        assert!((back - eur).abs() < 0.01);
    }

    #[test]
    fn test_sale_from_cost() {
        // Margin-on-sale-price: 20% markup means cost is 80% of sale
        assert_eq!(sale_from_cost(78.24, 20.0), Some(97.8));
        assert_eq!(sale_from_cost(100.0, 0.0), Some(100.0));
        assert_eq!(sale_from_cost(50.0, 50.0), Some(100.0));
    }

    #[test]
    fn test_sale_from_cost_is_not_cost_plus_markup() {
        // 20% on cost 100 would be 120 with the additive formula; the
        // margin-on-price formula gives 125
        assert_eq!(sale_from_cost(100.0, 20.0), Some(125.0));
    }

    #[test]
    fn test_markup_at_or_above_hundred_is_skipped() {
        assert_eq!(sale_from_cost(100.0, 100.0), None);
        assert_eq!(sale_from_cost(100.0, 150.0), None);
    }

    #[test]
    fn test_invalid_inputs_default_to_zero() {
        assert_eq!(sale_from_cost(-10.0, 20.0), Some(0.0));
        assert_eq!(sale_from_cost(f64::NAN, 20.0), Some(0.0));
        // Negative markup counts as zero, leaving sale == cost
        assert_eq!(sale_from_cost(80.0, -20.0), Some(80.0));
    }
}
