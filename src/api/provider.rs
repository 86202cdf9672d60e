use std::future::Future;

use crate::{
    error::FetchError,
    models::{InstrumentMetadata, LookbackPeriod, PriceHistory, TickerSymbol},
};

/// Read-only source of prices and descriptive data for a symbol.
pub trait MarketDataProvider {
    /// Daily closes over `period`, plus whatever descriptive fields come back
    /// with them. An unknown symbol yields an empty history, not an error.
    fn price_history(
        &self,
        symbol: &TickerSymbol,
        period: LookbackPeriod,
    ) -> impl Future<Output = Result<(PriceHistory, InstrumentMetadata), FetchError>> + Send;

    fn metadata(
        &self,
        symbol: &TickerSymbol,
    ) -> impl Future<Output = Result<InstrumentMetadata, FetchError>> + Send;
}
