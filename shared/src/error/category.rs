//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digits of the error code:
/// - 0xxx: General errors
/// - 1xxx: Client errors
/// - 2xxx-3xxx: Project structure errors (project, phase, variant, room)
/// - 4xxx: Order errors
/// - 5xxx: Invoice errors
/// - 6xxx: Product errors
/// - 7xxx-8xxx: Offer errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Client errors (1xxx)
    Client,
    /// Project structure errors (2xxx-3xxx)
    Project,
    /// Order errors (4xxx)
    Order,
    /// Invoice errors (5xxx)
    Invoice,
    /// Product errors (6xxx)
    Product,
    /// Offer errors (7xxx-8xxx)
    Offer,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Client,
            2000..4000 => Self::Project,
            4000..5000 => Self::Order,
            5000..6000 => Self::Invoice,
            6000..7000 => Self::Product,
            7000..9000 => Self::Offer,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Client => "client",
            Self::Project => "project",
            Self::Order => "order",
            Self::Invoice => "invoice",
            Self::Product => "product",
            Self::Offer => "offer",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(8), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Client);
        assert_eq!(ErrorCategory::from_code(1999), ErrorCategory::Client);

        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Project);
        assert_eq!(ErrorCategory::from_code(2101), ErrorCategory::Project);
        assert_eq!(ErrorCategory::from_code(2301), ErrorCategory::Project);
        assert_eq!(ErrorCategory::from_code(3999), ErrorCategory::Project);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Order);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Invoice);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Product);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Offer);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::ClientNotFound.category(), ErrorCategory::Client);
        assert_eq!(
            ErrorCode::ProjectNotFound.category(),
            ErrorCategory::Project
        );
        assert_eq!(ErrorCode::PhaseNotFound.category(), ErrorCategory::Project);
        assert_eq!(ErrorCode::RoomNotFound.category(), ErrorCategory::Project);
        assert_eq!(ErrorCode::OrderNotFound.category(), ErrorCategory::Order);
        assert_eq!(
            ErrorCode::InvoiceNotFound.category(),
            ErrorCategory::Invoice
        );
        assert_eq!(
            ErrorCode::ProductNotFound.category(),
            ErrorCategory::Product
        );
        assert_eq!(ErrorCode::OfferNotFound.category(), ErrorCategory::Offer);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::Client.name(), "client");
        assert_eq!(ErrorCategory::Project.name(), "project");
        assert_eq!(ErrorCategory::Order.name(), "order");
        assert_eq!(ErrorCategory::Invoice.name(), "invoice");
        assert_eq!(ErrorCategory::Product.name(), "product");
        assert_eq!(ErrorCategory::Offer.name(), "offer");
        assert_eq!(ErrorCategory::System.name(), "system");
    }

    #[test]
    fn test_category_serialize() {
        let category = ErrorCategory::Client;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"client\"");

        let category = ErrorCategory::Project;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"project\"");
    }

    #[test]
    fn test_category_deserialize() {
        let category: ErrorCategory = serde_json::from_str("\"client\"").unwrap();
        assert_eq!(category, ErrorCategory::Client);

        let category: ErrorCategory = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(category, ErrorCategory::System);
    }
}
