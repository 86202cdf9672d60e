pub mod market_snapshot_fetcher;
pub mod recommendation;
pub mod stock_lookup_service;

pub use market_snapshot_fetcher::{MarketSnapshotFetcher, derive_snapshot};
pub use recommendation::sample_recommendations;
pub use stock_lookup_service::{Lookup, LookupOutcome, StockLookupService};
