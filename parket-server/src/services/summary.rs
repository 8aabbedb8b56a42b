//! Offer summary computation.
//!
//! Loads a phase tree (variants, rooms, line items) from the database,
//! runs the pricing pipeline over it and shapes display-ready totals.
//! BGN amounts are the source of truth; EUR figures are converted at
//! the fixed rate for display. Nothing computed here is written back.

use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{Phase, Room, RoomProduct, Variant};
use crate::db::repository::{
    OfferRepository, PhaseRepository, RoomProductRepository, RoomRepository, VariantRepository,
};
use crate::pricing::{
    LineCalculation, PhaseTotals, RoomTotals, VariantTotals, bgn_to_eur, calculate_phase,
    calculate_room, calculate_variant, to_f64,
};
use shared::pricing::{PhasePricing, ProductLine, RoomPricing, VariantPricing};
use shared::{AppError, AppResult, ErrorCode};

impl From<&RoomProduct> for ProductLine {
    fn from(line: &RoomProduct) -> Self {
        Self {
            quantity: line.quantity,
            unit_price: line.unit_price,
            discount: line.discount,
            waste_percent: line.waste_percent,
        }
    }
}

fn room_pricing(room: &Room, lines: &[RoomProduct]) -> RoomPricing {
    RoomPricing {
        area: room.area,
        discount: room.discount,
        discount_enabled: room.discount_enabled,
        waste_percent: room.waste_percent,
        products: lines.iter().map(ProductLine::from).collect(),
    }
}

// ── Display DTOs ────────────────────────────────────────────────────

/// One priced line item, every amount rounded to 2 decimals.
#[derive(Debug, Clone, Serialize)]
pub struct LineSummary {
    pub id: Option<String>,
    pub description: Option<String>,
    pub unit: Option<String>,
    pub quantity: f64,
    pub waste_percent: f64,
    pub quantity_after_waste: f64,
    pub unit_price: f64,
    pub discount: f64,
    pub unit_price_after_discount: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoomSummary {
    pub id: Option<String>,
    pub name: String,
    pub lines: Vec<LineSummary>,
    pub total_bgn: f64,
    pub total_eur: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct VariantSummary {
    pub id: Option<String>,
    pub name: String,
    /// Excluded variants still get priced, they just do not feed the
    /// phase subtotal.
    pub include_in_offer: bool,
    pub commission_percent: f64,
    pub commission_amount: f64,
    pub rooms: Vec<RoomSummary>,
    pub total_bgn: f64,
    pub total_eur: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhaseSummary {
    pub id: Option<String>,
    pub name: String,
    pub variants: Vec<VariantSummary>,
    pub subtotal_bgn: f64,
    pub discount_percent: f64,
    pub discount_amount: f64,
    pub commission_percent: f64,
    pub commission_amount: f64,
    pub grand_total_bgn: f64,
    pub grand_total_eur: f64,
}

/// Offer header plus the freshly priced phase it points at.
#[derive(Debug, Clone, Serialize)]
pub struct OfferSummary {
    pub id: Option<String>,
    pub number: i64,
    pub issue_date: Option<i64>,
    pub valid_until: Option<i64>,
    pub notes: Option<String>,
    pub phase: PhaseSummary,
}

// ── Service ─────────────────────────────────────────────────────────

/// Computes summaries on demand from current entity data.
#[derive(Clone)]
pub struct SummaryService {
    db: Surreal<Db>,
}

impl SummaryService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    /// Price a single room, using the parent variant's discount as the
    /// fallback for lines without their own.
    pub async fn room_summary(&self, room_id: &str) -> AppResult<RoomSummary> {
        let room = RoomRepository::new(self.db.clone())
            .find_by_id(room_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::new(ErrorCode::RoomNotFound).with_detail("id", room_id))?;

        let variant = VariantRepository::new(self.db.clone())
            .find_by_id(&room.variant.to_string())
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        let variant_discount = variant.and_then(|v| v.variant_discount);

        let lines = self.room_lines(&room).await?;
        let totals = calculate_room(&room_pricing(&room, &lines), variant_discount);
        Ok(shape_room(&room, &lines, &totals))
    }

    pub async fn variant_summary(&self, variant_id: &str) -> AppResult<VariantSummary> {
        let variant = VariantRepository::new(self.db.clone())
            .find_by_id(variant_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| {
                AppError::new(ErrorCode::VariantNotFound).with_detail("id", variant_id)
            })?;

        let (pricing, rooms) = self.load_variant(&variant).await?;
        let totals = calculate_variant(&pricing);
        Ok(shape_variant(&variant, &rooms, &totals))
    }

    pub async fn phase_summary(&self, phase_id: &str) -> AppResult<PhaseSummary> {
        let phase = PhaseRepository::new(self.db.clone())
            .find_by_id(phase_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::new(ErrorCode::PhaseNotFound).with_detail("id", phase_id))?;

        let variants = VariantRepository::new(self.db.clone())
            .find_by_phase(&thing_id(&phase.id))
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        let mut loaded = Vec::with_capacity(variants.len());
        for variant in variants {
            let entry = self.load_variant(&variant).await?;
            loaded.push((variant, entry));
        }

        let pricing = PhasePricing {
            phase_discount: phase.phase_discount,
            discount_enabled: phase.discount_enabled,
            include_architect_commission: phase.include_architect_commission,
            architect_commission_percent: phase.architect_commission_percent,
            variants: loaded.iter().map(|(_, (p, _))| p.clone()).collect(),
        };
        let totals = calculate_phase(&pricing);
        Ok(shape_phase(&phase, &loaded, &totals))
    }

    /// Full summary for an offer: header fields plus the priced phase.
    pub async fn offer_summary(&self, offer_id: &str) -> AppResult<OfferSummary> {
        let offer = OfferRepository::new(self.db.clone())
            .find_by_id(offer_id)
            .await
            .map_err(|e| AppError::database(e.to_string()))?
            .ok_or_else(|| AppError::new(ErrorCode::OfferNotFound).with_detail("id", offer_id))?;

        let phase = self.phase_summary(&offer.phase.to_string()).await?;

        Ok(OfferSummary {
            id: offer.id.as_ref().map(|t| t.to_string()),
            number: offer.number,
            issue_date: offer.issue_date,
            valid_until: offer.valid_until,
            notes: offer.notes.clone(),
            phase,
        })
    }

    async fn load_variant(
        &self,
        variant: &Variant,
    ) -> AppResult<(VariantPricing, Vec<(Room, Vec<RoomProduct>)>)> {
        let rooms = RoomRepository::new(self.db.clone())
            .find_by_variant(&thing_id(&variant.id))
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        let mut loaded = Vec::with_capacity(rooms.len());
        for room in rooms {
            let lines = self.room_lines(&room).await?;
            loaded.push((room, lines));
        }

        let pricing = VariantPricing {
            include_in_offer: variant.include_in_offer,
            variant_discount: variant.variant_discount,
            architect_commission: variant.architect_commission,
            rooms: loaded
                .iter()
                .map(|(room, lines)| room_pricing(room, lines))
                .collect(),
        };
        Ok((pricing, loaded))
    }

    async fn room_lines(&self, room: &Room) -> AppResult<Vec<RoomProduct>> {
        RoomProductRepository::new(self.db.clone())
            .find_by_room(&thing_id(&room.id))
            .await
            .map_err(|e| AppError::database(e.to_string()))
    }
}

fn thing_id(id: &Option<surrealdb::sql::Thing>) -> String {
    id.as_ref().map(|t| t.to_string()).unwrap_or_default()
}

// ── Shaping ─────────────────────────────────────────────────────────

fn shape_line(line: &RoomProduct, calc: &LineCalculation) -> LineSummary {
    LineSummary {
        id: line.id.as_ref().map(|t| t.to_string()),
        description: line.description.clone(),
        unit: line.unit.clone(),
        quantity: to_f64(calc.quantity),
        waste_percent: to_f64(calc.waste_percent),
        quantity_after_waste: to_f64(calc.quantity_after_waste),
        unit_price: to_f64(calc.unit_price),
        discount: to_f64(calc.effective_discount),
        unit_price_after_discount: to_f64(calc.unit_price_after_discount),
        total: to_f64(calc.line_total),
    }
}

fn shape_room(room: &Room, lines: &[RoomProduct], totals: &RoomTotals) -> RoomSummary {
    let total_bgn = to_f64(totals.total);
    RoomSummary {
        id: room.id.as_ref().map(|t| t.to_string()),
        name: room.name.clone(),
        lines: lines
            .iter()
            .zip(&totals.lines)
            .map(|(line, calc)| shape_line(line, calc))
            .collect(),
        total_bgn,
        total_eur: bgn_to_eur(total_bgn),
    }
}

fn shape_variant(
    variant: &Variant,
    rooms: &[(Room, Vec<RoomProduct>)],
    totals: &VariantTotals,
) -> VariantSummary {
    let total_bgn = to_f64(totals.total);
    VariantSummary {
        id: variant.id.as_ref().map(|t| t.to_string()),
        name: variant.name.clone(),
        include_in_offer: totals.include_in_offer,
        commission_percent: to_f64(totals.commission_percent),
        commission_amount: to_f64(totals.commission_amount),
        rooms: rooms
            .iter()
            .zip(&totals.rooms)
            .map(|((room, lines), room_totals)| shape_room(room, lines, room_totals))
            .collect(),
        total_bgn,
        total_eur: bgn_to_eur(total_bgn),
    }
}

type LoadedVariant = (VariantPricing, Vec<(Room, Vec<RoomProduct>)>);

fn shape_phase(
    phase: &Phase,
    variants: &[(Variant, LoadedVariant)],
    totals: &PhaseTotals,
) -> PhaseSummary {
    let grand_total_bgn = to_f64(totals.grand_total);
    PhaseSummary {
        id: phase.id.as_ref().map(|t| t.to_string()),
        name: phase.name.clone(),
        variants: variants
            .iter()
            .zip(&totals.variants)
            .map(|((variant, (_, rooms)), variant_totals)| {
                shape_variant(variant, rooms, variant_totals)
            })
            .collect(),
        subtotal_bgn: to_f64(totals.subtotal),
        discount_percent: to_f64(totals.discount_percent),
        discount_amount: to_f64(totals.discount_amount),
        commission_percent: to_f64(totals.commission_percent),
        commission_amount: to_f64(totals.commission_amount),
        grand_total_bgn,
        grand_total_eur: bgn_to_eur(grand_total_bgn),
    }
}
