//! Price Aggregation Module
//!
//! This module computes displayed totals for the project tree. Line items
//! are priced with the waste/discount pipeline, then rolled up into room,
//! variant and phase totals. Nothing here is persisted; totals are
//! recomputed from entity data on every request.

mod currency;
mod line;
mod rollup;

pub use currency::*;
pub use line::*;
pub use rollup::*;
