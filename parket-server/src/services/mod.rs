//! Service layer.
//!
//! # Services
//!
//! - [`http`] - router assembly and request logging
//! - [`SummaryService`] - on-demand offer/phase/variant/room pricing

pub mod http;
pub mod summary;

pub use summary::SummaryService;
