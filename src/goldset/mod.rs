//! Per-issue goldset aggregation and persistence.

mod aggregator;
mod store;

pub use aggregator::GoldsetAggregator;
pub use store::{GoldsetStore, PersistOutcome};
