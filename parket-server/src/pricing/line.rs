//! Line-Item Price Calculator
//!
//! Calculates the billed total for a single room product line:
//! - Waste percent inflates the billed quantity (extra material ordered to
//!   cover cutting/installation loss)
//! - Discount percent reduces the unit price
//! - Missing values fall back along the product -> room -> variant chain
//!
//! Uses rust_decimal for precision calculations.

use rust_decimal::prelude::*;
use shared::pricing::ProductLine;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

// ==================== Conversion Helpers ====================

/// Convert f64 to Decimal for calculation
///
/// If NaN/Infinity reaches here, logs an error and returns ZERO to avoid
/// silent data corruption in monetary calculations.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in price calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for display, rounded to 2 decimal places
///
/// The pipeline itself never rounds; this is applied only when shaping
/// response payloads.
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}

// ==================== Fallback Resolution ====================

/// Validate a chosen factor value: negative or non-finite counts as zero
pub(super) fn sanitize(value: f64) -> Decimal {
    if !value.is_finite() {
        tracing::error!(value = ?value, "Non-finite factor in price calculation, defaulting to zero");
        return Decimal::ZERO;
    }
    if value < 0.0 {
        return Decimal::ZERO;
    }
    to_decimal(value)
}

/// Resolve a factor along the product -> room -> variant fallback chain.
///
/// The first defined value wins, even when a later level also defines one.
/// The chosen value is then validated: negative or non-finite values count
/// as zero for that factor. Values above 100 are passed through as given;
/// the pipeline does not clamp percentages.
pub fn resolve_effective(
    product: Option<f64>,
    room: Option<f64>,
    variant: Option<f64>,
    default: Decimal,
) -> Decimal {
    match product.or(room).or(variant) {
        Some(value) => sanitize(value),
        None => default,
    }
}

// ==================== Line Calculation ====================

/// Fallback values a line inherits from its room and variant
#[derive(Debug, Clone, Default)]
pub struct LineContext {
    /// Default billed quantity (the room's area)
    pub default_quantity: Option<f64>,
    pub room_discount: Option<f64>,
    /// When false, the room discount is skipped in the fallback chain
    pub room_discount_enabled: bool,
    pub room_waste_percent: Option<f64>,
    pub variant_discount: Option<f64>,
}

/// Result of a line calculation with all intermediate values
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineCalculation {
    /// Resolved quantity (explicit or inherited from the room area)
    pub quantity: Decimal,
    /// Resolved waste percent
    pub waste_percent: Decimal,
    /// Resolved discount percent after the fallback chain
    pub effective_discount: Decimal,
    /// Resolved unit price
    pub unit_price: Decimal,
    /// Quantity inflated by waste
    pub quantity_after_waste: Decimal,
    /// Unit price reduced by discount
    pub unit_price_after_discount: Decimal,
    /// Billed total for this line
    pub line_total: Decimal,
}

/// Calculate the billed total for one product line
///
/// # Arguments
/// * `line` - The product line (quantity, unit price, overrides)
/// * `ctx` - Fallback values from the owning room and variant
///
/// # Calculation Steps
/// 1. Resolve quantity (line value, else the room area)
/// 2. Resolve waste percent (line, else room) and discount percent
///    (line, else room when enabled, else variant)
/// 3. quantity_after_waste = quantity * (1 + waste / 100)
/// 4. unit_price_after_discount = unit_price * (1 - discount / 100)
/// 5. line_total = quantity_after_waste * unit_price_after_discount
///
/// Waste applies to quantity and discount to unit price; the two steps are
/// not interchangeable with a combined factor once display rounding enters.
/// A discount above 100 produces a negative unit price and is applied as
/// given.
///
/// # Returns
/// [`LineCalculation`] with all intermediate values
pub fn calculate_line(line: &ProductLine, ctx: &LineContext) -> LineCalculation {
    let quantity = resolve_effective(line.quantity, ctx.default_quantity, None, Decimal::ZERO);
    let waste_percent =
        resolve_effective(line.waste_percent, ctx.room_waste_percent, None, Decimal::ZERO);

    let room_discount = if ctx.room_discount_enabled {
        ctx.room_discount
    } else {
        None
    };
    let effective_discount = resolve_effective(
        line.discount,
        room_discount,
        ctx.variant_discount,
        Decimal::ZERO,
    );

    let unit_price = resolve_effective(line.unit_price, None, None, Decimal::ZERO);

    let hundred = Decimal::ONE_HUNDRED;
    let quantity_after_waste = quantity * (Decimal::ONE + waste_percent / hundred);
    let unit_price_after_discount = unit_price * (Decimal::ONE - effective_discount / hundred);
    let line_total = quantity_after_waste * unit_price_after_discount;

    LineCalculation {
        quantity,
        waste_percent,
        effective_discount,
        unit_price,
        quantity_after_waste,
        unit_price_after_discount,
        line_total,
    }
}

// ==================== Tests ====================
