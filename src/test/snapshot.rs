#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::{
        api::{utils::RawResponse, yahoo::parse_chart},
        models::{PriceHistory, PricePoint},
        services::derive_snapshot,
    };

    fn history(closes: &[Decimal]) -> PriceHistory {
        PriceHistory::new(
            closes
                .iter()
                .enumerate()
                .map(|(i, close)| {
                    let date = DateTime::from_timestamp(1_700_000_000 + i as i64 * 86_400, 0).unwrap();
                    PricePoint::new(date, *close)
                })
                .collect(),
        )
    }

    #[test]
    fn two_points_give_change_and_percent() {
        let result = derive_snapshot(&history(&[dec!(100.0), dec!(105.0)])).unwrap();

        assert_eq!(*result.price(), dec!(105.0));
        assert_eq!(*result.previous_close(), dec!(100.0));
        assert_eq!(*result.change(), dec!(5.0));
        assert_eq!(*result.change_percent(), dec!(5.0));
    }

    #[test]
    fn single_point_has_no_change() {
        let result = derive_snapshot(&history(&[dec!(50.0)])).unwrap();

        assert_eq!(*result.price(), dec!(50.0));
        assert_eq!(*result.previous_close(), dec!(50.0));
        assert_eq!(*result.change(), Decimal::ZERO);
        assert_eq!(*result.change_percent(), Decimal::ZERO);
    }

    #[test]
    fn empty_history_has_no_snapshot() {
        assert!(derive_snapshot(&PriceHistory::default()).is_none());
    }

    #[test]
    fn zero_previous_close_gives_zero_percent() {
        let result = derive_snapshot(&history(&[dec!(3.0), dec!(0), dec!(12.5)])).unwrap();

        assert_eq!(*result.previous_close(), Decimal::ZERO);
        assert_eq!(*result.change(), dec!(12.5));
        assert_eq!(*result.change_percent(), Decimal::ZERO);
    }

    #[test]
    fn only_the_last_two_points_matter() {
        let samples = [
            vec![dec!(10), dec!(20), dec!(15)],
            vec![dec!(1432.5999), dec!(1450.1), dec!(1449.98), dec!(1401.02)],
            vec![dec!(8.12), dec!(8.12)],
            vec![dec!(99.99), dec!(0.01)],
        ];

        for closes in samples {
            let result = derive_snapshot(&history(&closes)).unwrap();
            let latest = closes[closes.len() - 1];
            let previous = closes[closes.len() - 2];

            assert_eq!(*result.price(), latest);
            assert_eq!(*result.previous_close(), previous);
            assert_eq!(*result.change(), latest - previous);
            assert_eq!(
                *result.change_percent(),
                (latest - previous) / previous * dec!(100)
            );
        }
    }

    #[test]
    fn falling_price_gives_negative_change() {
        let result = derive_snapshot(&history(&[dec!(200), dec!(150)])).unwrap();

        assert_eq!(*result.change(), dec!(-50));
        assert_eq!(*result.change_percent(), dec!(-25));
    }

    #[test]
    fn history_is_sorted_by_date() {
        let late = DateTime::from_timestamp(1_700_086_400, 0).unwrap();
        let early = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let history = PriceHistory::new(vec![
            PricePoint::new(late, dec!(105)),
            PricePoint::new(early, dec!(100)),
        ]);

        let result = derive_snapshot(&history).unwrap();

        assert_eq!(*result.price(), dec!(105));
        assert_eq!(*result.previous_close(), dec!(100));
    }

    #[test]
    fn huge_jump_gives_zero_percent_instead_of_overflowing() {
        let result = derive_snapshot(&history(&[dec!(0.0001), dec!(7000000000000000000000000)])).unwrap();

        assert_eq!(*result.change(), dec!(6999999999999999999999999.9999));
        assert_eq!(*result.change_percent(), Decimal::ZERO);
    }

    #[test]
    fn unrepresentable_change_gives_no_snapshot() {
        assert!(derive_snapshot(&history(&[Decimal::MIN, Decimal::MAX])).is_none());
    }

    #[test]
    fn extreme_provider_closes_do_not_panic() {
        let body = serde_json::json!({
            "chart": {
                "result": [{
                    "timestamp": [1700000000, 1700086400],
                    "indicators": { "quote": [{ "close": [0.0001, 7.0e24] }] }
                }],
                "error": null
            }
        })
        .to_string();
        let (history, _) = parse_chart(&RawResponse { status: 200, body }).unwrap();

        let result = derive_snapshot(&history).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(*result.change_percent(), Decimal::ZERO);
    }
}
