use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{info, warn};

use crate::{
    api::MarketDataProvider,
    error::FetchError,
    models::{InstrumentMetadata, LookbackPeriod, PriceHistory, Snapshot, TickerSymbol},
};

pub struct MarketSnapshotFetcher<P> {
    provider: P,
}

impl<P: MarketDataProvider> MarketSnapshotFetcher<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// One price-history request, then one metadata request when there is
    /// anything to describe. Nothing is retried.
    pub async fn fetch(
        &self,
        symbol: &TickerSymbol,
        period: LookbackPeriod,
    ) -> Result<(PriceHistory, InstrumentMetadata), FetchError> {
        info!(%symbol, %period, "Fetching price history");
        let (history, chart_metadata) = self.provider.price_history(symbol, period).await?;

        if history.is_empty() {
            info!(%symbol, "No price data");
            return Ok((history, chart_metadata));
        }

        let metadata = match self.provider.metadata(symbol).await {
            Ok(metadata) => metadata.or(chart_metadata),
            Err(e) if e.is_auth_refusal() => {
                warn!(%symbol, error = %e, "Session refused for metadata, using chart metadata");
                chart_metadata
            }
            Err(e) => return Err(e),
        };

        info!(%symbol, points = history.len(), "Fetched price history");
        Ok((history, metadata))
    }
}

pub fn derive_snapshot(history: &PriceHistory) -> Option<Snapshot> {
    let points = history.points();
    let latest = *points.last()?.close();
    let previous = match points.len() {
        0 | 1 => latest,
        n => *points[n - 2].close(),
    };

    // Closes are untrusted, so out-of-range values must not panic.
    let change = latest.checked_sub(previous)?;
    let change_percent = if previous == Decimal::ZERO {
        Decimal::ZERO
    } else {
        change
            .checked_div(previous)
            .and_then(|ratio| ratio.checked_mul(dec!(100)))
            .unwrap_or(Decimal::ZERO)
    };

    Some(Snapshot::new(latest, previous, change, change_percent))
}
