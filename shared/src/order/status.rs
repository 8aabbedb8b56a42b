//! Order status resolution
//!
//! An order carries three independent sub-statuses (confirmation, payment,
//! delivery) written by separate workflows. The UI shows a single badge, so
//! the three axes are collapsed into one [`OverallStatus`] by a fixed
//! priority cascade. The derived value is never persisted; it is recomputed
//! from the three flags on every read.

use serde::{Deserialize, Serialize};

/// Confirmation sub-status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfirmationStatus {
    /// Awaiting client confirmation
    #[default]
    Pending,
    /// Confirmed by the client
    Confirmed,
    /// Rejected by the client
    Rejected,
    /// Unrecognized value from the backend
    #[serde(other)]
    Unknown,
}

/// Payment sub-status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// No payment received
    #[default]
    Unpaid,
    /// Partially paid
    Partial,
    /// Fully paid
    Paid,
    /// Unrecognized value from the backend
    #[serde(other)]
    Unknown,
}

/// Delivery sub-status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    /// Not yet shipped
    #[default]
    Pending,
    /// On the way to the client
    InTransit,
    /// Delivered to the client
    Delivered,
    /// Unrecognized value from the backend
    #[serde(other)]
    Unknown,
}

/// Single display status derived from the three sub-statuses
///
/// Confirmation and payment are blocking preconditions: an order is never
/// shown as "in delivery" while unconfirmed or unpaid, even if the delivery
/// flag was already set by another workflow. The cascade in [`resolve`]
/// therefore collapses the three axes to the most actionable one.
///
/// [`resolve`]: OverallStatus::resolve
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallStatus {
    /// Fallback for malformed sub-status combinations
    Unknown,
    /// Not yet confirmed (or rejected) by the client
    Unconfirmed,
    /// Confirmed but no payment received
    Unpaid,
    /// Confirmed and partially paid
    PartiallyPaid,
    /// Fully paid, delivery not started
    AwaitingDelivery,
    /// Shipment on the way
    InDelivery,
    /// Delivered to the client
    Delivered,
}

impl OverallStatus {
    /// Derive the overall status from the three sub-statuses.
    ///
    /// Pure and total: rules are checked top to bottom, first match wins,
    /// and every input combination maps to exactly one variant. Unrecognized
    /// sub-status values fall through to [`OverallStatus::Unknown`] instead
    /// of failing, since the flags originate from workflows this code does
    /// not control.
    pub fn resolve(
        confirmation: ConfirmationStatus,
        payment: PaymentStatus,
        delivery: DeliveryStatus,
    ) -> Self {
        if confirmation != ConfirmationStatus::Confirmed {
            return Self::Unconfirmed;
        }
        if payment == PaymentStatus::Unpaid {
            return Self::Unpaid;
        }
        if payment == PaymentStatus::Partial {
            return Self::PartiallyPaid;
        }
        if payment == PaymentStatus::Paid && delivery == DeliveryStatus::Pending {
            return Self::AwaitingDelivery;
        }
        if delivery == DeliveryStatus::InTransit {
            return Self::InDelivery;
        }
        if delivery == DeliveryStatus::Delivered {
            return Self::Delivered;
        }
        Self::Unknown
    }

    /// Priority rank of this status (higher = further along the pipeline)
    pub const fn priority_rank(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Unconfirmed => 1,
            Self::Unpaid => 2,
            Self::PartiallyPaid => 3,
            Self::AwaitingDelivery => 4,
            Self::InDelivery => 5,
            Self::Delivered => 6,
        }
    }

    /// Wire/display label, identical to the serialized form
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Unconfirmed => "UNCONFIRMED",
            Self::Unpaid => "UNPAID",
            Self::PartiallyPaid => "PARTIALLY_PAID",
            Self::AwaitingDelivery => "AWAITING_DELIVERY",
            Self::InDelivery => "IN_DELIVERY",
            Self::Delivered => "DELIVERED",
        }
    }

    /// CSS class for the status badge
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Unknown => "status-unknown",
            Self::Unconfirmed => "status-unconfirmed",
            Self::Unpaid => "status-unpaid",
            Self::PartiallyPaid => "status-partially-paid",
            Self::AwaitingDelivery => "status-awaiting-delivery",
            Self::InDelivery => "status-in-delivery",
            Self::Delivered => "status-delivered",
        }
    }
}
