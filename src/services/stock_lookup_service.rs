use derive_getters::Getters;
use rand::Rng;
use tracing::warn;

use super::{
    market_snapshot_fetcher::{MarketSnapshotFetcher, derive_snapshot},
    recommendation::{RECOMMENDATION_COUNT, RECOMMENDATION_POOL, sample_recommendations},
};
use crate::{
    api::MarketDataProvider,
    models::{
        InstrumentMetadata, LookbackPeriod, PriceHistory, Recommendation, Snapshot, TickerSymbol,
    },
};

#[derive(Clone, Debug, Getters)]
pub struct Lookup {
    symbol: TickerSymbol,
    period: LookbackPeriod,
    history: PriceHistory,
    metadata: InstrumentMetadata,
    snapshot: Snapshot,
    recommendations: Vec<Recommendation>,
}

#[derive(Clone, Debug)]
pub enum LookupOutcome {
    Found(Lookup),
    NoData(TickerSymbol),
    Failed(String),
}

pub struct StockLookupService<P, R> {
    fetcher: MarketSnapshotFetcher<P>,
    rng: R,
}

impl<P, R> StockLookupService<P, R>
where
    P: MarketDataProvider,
    R: Rng,
{
    pub fn new(provider: P, rng: R) -> Self {
        Self {
            fetcher: MarketSnapshotFetcher::new(provider),
            rng,
        }
    }

    /// Never fails: every error is turned into a message for the user.
    pub async fn lookup(&mut self, input: &str, period: LookbackPeriod) -> LookupOutcome {
        let symbol = match TickerSymbol::parse(input) {
            Ok(symbol) => symbol,
            Err(_) => return LookupOutcome::Failed(String::from("Please enter a stock symbol.")),
        };

        let (history, metadata) = match self.fetcher.fetch(&symbol, period).await {
            Ok(result) => result,
            Err(e) => {
                warn!(%symbol, error = %e, "Lookup failed");
                return LookupOutcome::Failed(format!("Failed to retrieve stock data: {}", e));
            }
        };

        let Some(snapshot) = derive_snapshot(&history) else {
            return LookupOutcome::NoData(symbol);
        };

        let recommendations =
            sample_recommendations(&mut self.rng, &RECOMMENDATION_POOL, RECOMMENDATION_COUNT);

        LookupOutcome::Found(Lookup {
            symbol,
            period,
            history,
            metadata,
            snapshot,
            recommendations,
        })
    }
}
