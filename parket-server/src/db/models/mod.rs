//! Database Models

// Serde helpers
pub mod serde_helpers;
pub mod serde_thing;

// Client Domain
pub mod client;
pub mod project;

// Project Structure
pub mod phase;
pub mod room;
pub mod room_product;
pub mod variant;

// Catalog
pub mod product;

// Documents
pub mod invoice;
pub mod offer;
pub mod order;

// Re-exports
pub use client::{Client, ClientCreate, ClientUpdate};
pub use project::{Project, ProjectCreate, ProjectUpdate};
pub use phase::{Phase, PhaseCreate, PhaseUpdate};
pub use variant::{Variant, VariantCreate, VariantUpdate};
pub use room::{Room, RoomCreate, RoomUpdate};
pub use room_product::{RoomProduct, RoomProductCreate, RoomProductUpdate};
pub use product::{Product, ProductCreate, ProductUpdate};
pub use order::{Order, OrderCreate, OrderUpdate};
pub use invoice::{Invoice, InvoiceCreate, InvoiceUpdate};
pub use offer::{Offer, OfferCreate, OfferUpdate};
