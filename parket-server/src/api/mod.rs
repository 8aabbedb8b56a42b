//! API route modules.
//!
//! # Structure
//!
//! - [`health`] - health checks
//! - [`clients`] - client management
//! - [`projects`] - projects per client
//! - [`phases`] - project phases
//! - [`variants`] - design variants per phase
//! - [`rooms`] - rooms per variant
//! - [`room_products`] - line items per room
//! - [`products`] - product catalog
//! - [`orders`] - supplier orders with derived status
//! - [`invoices`] - invoices
//! - [`offers`] - offers with computed summaries

pub mod health;

// Client and project tree API
pub mod clients;
pub mod phases;
pub mod projects;
pub mod room_products;
pub mod rooms;
pub mod variants;

// Catalog and documents API
pub mod invoices;
pub mod offers;
pub mod orders;
pub mod products;
