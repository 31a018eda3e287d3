//! The data pipeline: record store, one-shot fetch, filter evaluator,
//! sort comparator, aggregations, comparison selection, CSV export.
//!
//! Everything except `fetch` is pure and synchronous; the UI layer calls
//! these functions on demand and renders whatever they return.

pub mod aggregate;
pub mod compare;
pub mod export;
pub mod fetch;
pub mod filter;
pub mod model;
pub mod sort;

pub use model::{Catalog, Record};
