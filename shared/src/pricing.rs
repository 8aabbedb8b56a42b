//! Pricing input records
//!
//! Plain data shapes consumed by the price aggregation pipeline on the
//! server. They mirror the project tree (phase, variant, room, product line)
//! but carry only the fields the arithmetic needs. Percent fields hold
//! whole-number percentages (20 = 20%). Missing numeric fields are left as
//! `None` so the pipeline can apply its fallback chain instead of guessing
//! here.

use serde::{Deserialize, Serialize};

/// One product line inside a room
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ProductLine {
    /// Billed quantity in the room's area unit; inherits the room area when absent
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
    /// Discount percent override; falls back to room, then variant
    pub discount: Option<f64>,
    /// Waste percent override; falls back to the room
    pub waste_percent: Option<f64>,
}

/// Room record with its line items and fallback defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RoomPricing {
    /// Floor area, also the default billed quantity for its lines
    pub area: f64,
    pub discount: Option<f64>,
    /// When false, the room discount is not used as a fallback
    pub discount_enabled: bool,
    pub waste_percent: Option<f64>,
    pub products: Vec<ProductLine>,
}

/// Variant record with its rooms
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VariantPricing {
    /// Excluded variants contribute zero to phase and offer totals
    pub include_in_offer: bool,
    /// Last fallback for line discounts
    pub variant_discount: Option<f64>,
    /// Commission percent shown on the variant's own summary
    pub architect_commission: Option<f64>,
    pub rooms: Vec<RoomPricing>,
}

impl Default for VariantPricing {
    fn default() -> Self {
        Self {
            include_in_offer: true,
            variant_discount: None,
            architect_commission: None,
            rooms: Vec::new(),
        }
    }
}

/// Phase record with its variants
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PhasePricing {
    pub phase_discount: Option<f64>,
    /// When false, the phase discount is ignored in totals
    pub discount_enabled: bool,
    pub include_architect_commission: bool,
    pub architect_commission_percent: Option<f64>,
    pub variants: Vec<VariantPricing>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_line_defaults() {
        let line: ProductLine = serde_json::from_str("{}").unwrap();
        assert_eq!(line.quantity, None);
        assert_eq!(line.unit_price, None);
        assert_eq!(line.discount, None);
        assert_eq!(line.waste_percent, None);
    }

    #[test]
    fn test_room_defaults() {
        let room: RoomPricing = serde_json::from_str("{}").unwrap();
        assert_eq!(room.area, 0.0);
        assert!(!room.discount_enabled);
        assert!(room.products.is_empty());
    }

    #[test]
    fn test_variant_included_by_default() {
        let variant: VariantPricing = serde_json::from_str("{}").unwrap();
        assert!(variant.include_in_offer);
        assert_eq!(variant.variant_discount, None);
    }

    #[test]
    fn test_nested_phase_deserialize() {
        let json = r#"{
            "phase_discount": 10.0,
            "discount_enabled": true,
            "include_architect_commission": true,
            "architect_commission_percent": 5.0,
            "variants": [
                {
                    "include_in_offer": false,
                    "rooms": [
                        {
                            "area": 20.0,
                            "discount": 10.0,
                            "discount_enabled": true,
                            "waste_percent": 5.0,
                            "products": [
                                {"unit_price": 50.0}
                            ]
                        }
                    ]
                }
            ]
        }"#;

        let phase: PhasePricing = serde_json::from_str(json).unwrap();
        assert_eq!(phase.phase_discount, Some(10.0));
        assert!(phase.include_architect_commission);
        assert_eq!(phase.variants.len(), 1);
        assert!(!phase.variants[0].include_in_offer);

        let room = &phase.variants[0].rooms[0];
        assert_eq!(room.area, 20.0);
        assert_eq!(room.products[0].unit_price, Some(50.0));
        assert_eq!(room.products[0].quantity, None);
    }
}
