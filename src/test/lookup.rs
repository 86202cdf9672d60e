#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};
    use rust_decimal_macros::dec;

    use crate::{
        models::{InstrumentMetadata, LookbackPeriod},
        services::{LookupOutcome, StockLookupService, recommendation::RECOMMENDATION_POOL},
        test::fetcher::tests::FakeProvider,
    };

    fn service(provider: FakeProvider) -> StockLookupService<FakeProvider, StdRng> {
        StockLookupService::new(provider, StdRng::seed_from_u64(11))
    }

    #[tokio::test]
    async fn found_lookup_carries_snapshot_and_recommendations() {
        let mut service = service(FakeProvider::new(
            Some(vec![dec!(100.0), dec!(105.0)]),
            Some(InstrumentMetadata::default()),
        ));

        let outcome = service.lookup(" 600519.ss", LookbackPeriod::OneMonth).await;

        let lookup = match outcome {
            LookupOutcome::Found(lookup) => lookup,
            other => panic!("expected data, got {:?}", other),
        };
        assert_eq!(lookup.symbol().as_str(), "600519.SS");
        assert_eq!(*lookup.period(), LookbackPeriod::OneMonth);
        assert_eq!(*lookup.snapshot().price(), dec!(105.0));
        assert_eq!(*lookup.snapshot().change_percent(), dec!(5.0));

        let symbols: HashSet<&str> = lookup
            .recommendations()
            .iter()
            .map(|r| r.symbol().as_str())
            .collect();
        assert_eq!(symbols.len(), 3);
        assert!(symbols.iter().all(|s| RECOMMENDATION_POOL.contains(s)));
    }

    #[tokio::test]
    async fn empty_history_is_no_data() {
        let mut service = service(FakeProvider::new(Some(Vec::new()), None));

        let outcome = service.lookup("999999.SS", LookbackPeriod::FiveDays).await;

        match outcome {
            LookupOutcome::NoData(symbol) => assert_eq!(symbol.as_str(), "999999.SS"),
            other => panic!("expected no data, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn transport_fault_becomes_warning_with_cause() {
        let mut service = service(FakeProvider::new(None, None));

        let outcome = service.lookup("600519.SS", LookbackPeriod::OneMonth).await;

        match outcome {
            LookupOutcome::Failed(message) => {
                assert!(message.starts_with("Failed to retrieve stock data"));
                assert!(message.contains("connection reset by peer"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn blank_input_is_rejected_without_fetching() {
        let mut service = service(FakeProvider::new(None, None));

        let outcome = service.lookup("   ", LookbackPeriod::OneMonth).await;

        assert!(matches!(outcome, LookupOutcome::Failed(_)));
    }
}
