//! Room/Variant/Phase Roll-Up
//!
//! Aggregates line calculations up the project tree:
//! - Room total = sum of its line totals
//! - Variant total = sum of its room totals
//! - Phase total = sum of included variant totals, minus phase discount,
//!   plus architect commission
//!
//! Excluded variants (`include_in_offer == false`) contribute zero to phase
//! totals but are still computed so they stay displayable on their own.
//! All sums stay in Decimal; display rounding happens when the response
//! payload is shaped.

use rust_decimal::Decimal;
use shared::pricing::{PhasePricing, RoomPricing, VariantPricing};

use super::line::{LineCalculation, LineContext, calculate_line, resolve_effective};

/// Room total with its per-line breakdown
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomTotals {
    pub lines: Vec<LineCalculation>,
    /// Sum of all line totals
    pub total: Decimal,
}

/// Variant total with its per-room breakdown
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariantTotals {
    /// Whether this variant counts toward phase and offer totals
    pub include_in_offer: bool,
    pub rooms: Vec<RoomTotals>,
    /// Sum of all room totals
    pub total: Decimal,
    /// Commission percent shown on the variant's own summary
    pub commission_percent: Decimal,
    /// total * commission_percent / 100
    pub commission_amount: Decimal,
}

/// Phase total with its per-variant breakdown
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhaseTotals {
    /// All variants, excluded ones included for display
    pub variants: Vec<VariantTotals>,
    /// Sum of included variant totals
    pub subtotal: Decimal,
    pub discount_percent: Decimal,
    /// subtotal * discount_percent / 100 when the phase discount is enabled
    pub discount_amount: Decimal,
    pub commission_percent: Decimal,
    /// Commission on the pre-discount subtotal
    pub commission_amount: Decimal,
    /// subtotal - discount_amount + commission_amount
    pub grand_total: Decimal,
}

/// Calculate a room's total from its product lines
///
/// `variant_discount` is the room's last discount fallback, passed down from
/// the owning variant (None when the room is priced standalone).
pub fn calculate_room(room: &RoomPricing, variant_discount: Option<f64>) -> RoomTotals {
    let ctx = LineContext {
        default_quantity: Some(room.area),
        room_discount: room.discount,
        room_discount_enabled: room.discount_enabled,
        room_waste_percent: room.waste_percent,
        variant_discount,
    };

    let mut total = Decimal::ZERO;
    let mut lines = Vec::with_capacity(room.products.len());
    for product in &room.products {
        let calc = calculate_line(product, &ctx);
        total += calc.line_total;
        lines.push(calc);
    }

    RoomTotals { lines, total }
}

/// Calculate a variant's total from its rooms
pub fn calculate_variant(variant: &VariantPricing) -> VariantTotals {
    let mut total = Decimal::ZERO;
    let mut rooms = Vec::with_capacity(variant.rooms.len());
    for room in &variant.rooms {
        let room_totals = calculate_room(room, variant.variant_discount);
        total += room_totals.total;
        rooms.push(room_totals);
    }

    let commission_percent =
        resolve_effective(variant.architect_commission, None, None, Decimal::ZERO);
    let commission_amount = total * commission_percent / Decimal::ONE_HUNDRED;

    VariantTotals {
        include_in_offer: variant.include_in_offer,
        rooms,
        total,
        commission_percent,
        commission_amount,
    }
}

/// Calculate a phase's totals from its variants
///
/// # Calculation Steps
/// 1. subtotal = sum of totals of variants with `include_in_offer == true`
/// 2. discount_amount = subtotal * phase_discount / 100 (when enabled)
/// 3. commission_amount = subtotal * commission_percent / 100 (when enabled);
///    the commission basis is the pre-discount subtotal
/// 4. grand_total = subtotal - discount_amount + commission_amount
///
/// The grand total is not clamped; a discount above 100 produces a negative
/// total, matching the line-level behavior.
pub fn calculate_phase(phase: &PhasePricing) -> PhaseTotals {
    let mut subtotal = Decimal::ZERO;
    let mut variants = Vec::with_capacity(phase.variants.len());
    for variant in &phase.variants {
        let variant_totals = calculate_variant(variant);
        if variant_totals.include_in_offer {
            subtotal += variant_totals.total;
        }
        variants.push(variant_totals);
    }

    let discount_percent = if phase.discount_enabled {
        resolve_effective(phase.phase_discount, None, None, Decimal::ZERO)
    } else {
        Decimal::ZERO
    };
    let discount_amount = subtotal * discount_percent / Decimal::ONE_HUNDRED;

    let commission_percent = if phase.include_architect_commission {
        resolve_effective(phase.architect_commission_percent, None, None, Decimal::ZERO)
    } else {
        Decimal::ZERO
    };
    let commission_amount = subtotal * commission_percent / Decimal::ONE_HUNDRED;

    let grand_total = subtotal - discount_amount + commission_amount;

    PhaseTotals {
        variants,
        subtotal,
        discount_percent,
        discount_amount,
        commission_percent,
        commission_amount,
        grand_total,
    }
}

// ==================== Tests ====================
