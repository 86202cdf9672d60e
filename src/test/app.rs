#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::{SeedableRng, rngs::StdRng};
    use ratatui::style::Color;
    use rust_decimal_macros::dec;

    use crate::{
        app::{
            App, KeyAction,
            utils::{change_color, format_change, format_signed},
        },
        models::{InstrumentMetadata, LookbackPeriod, Snapshot},
        services::{LookupOutcome, StockLookupService},
        test::fetcher::tests::FakeProvider,
    };

    fn app(provider: FakeProvider) -> App<FakeProvider> {
        let service = StockLookupService::new(provider, StdRng::seed_from_u64(5));
        App::new(service, "600519.SS", LookbackPeriod::OneMonth)
    }

    fn idle_app() -> App<FakeProvider> {
        app(FakeProvider::new(None, None))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_and_changing_period_do_not_search() {
        let mut app = idle_app();

        assert_eq!(app.handle_key(key(KeyCode::Backspace)), KeyAction::Redraw);
        assert_eq!(app.handle_key(key(KeyCode::Char('8'))), KeyAction::Redraw);
        assert_eq!(app.handle_key(key(KeyCode::Right)), KeyAction::Redraw);

        assert_eq!(app.input(), "600519.S8");
        assert_eq!(app.period(), LookbackPeriod::ThreeMonths);
    }

    #[test]
    fn enter_searches_and_escape_quits() {
        let mut app = idle_app();

        assert_eq!(app.handle_key(key(KeyCode::Enter)), KeyAction::Search);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
    }

    #[test]
    fn left_wraps_to_last_period() {
        let mut app = idle_app();

        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));

        assert_eq!(app.period(), LookbackPeriod::OneYear);
    }

    #[tokio::test]
    async fn failed_search_shows_error_popup_until_dismissed() {
        let mut app = idle_app();

        app.search().await;

        let popup = app.error_popup().clone().unwrap();
        assert!(popup.contains("Failed to retrieve stock data"));
        assert!(popup.contains("connection reset by peer"));

        assert_eq!(app.handle_key(key(KeyCode::Esc)), KeyAction::Redraw);
        assert!(app.error_popup().is_none());
    }

    #[tokio::test]
    async fn successful_search_stores_lookup_without_popup() {
        let mut app = app(FakeProvider::new(
            Some(vec![dec!(100), dec!(105)]),
            Some(InstrumentMetadata::default()),
        ));

        app.search().await;

        assert!(app.error_popup().is_none());
        assert!(matches!(app.outcome(), Some(LookupOutcome::Found(_))));
    }

    #[test]
    fn change_is_formatted_with_sign() {
        let up = Snapshot::new(dec!(105), dec!(100), dec!(5), dec!(5));
        let down = Snapshot::new(dec!(98.5), dec!(100), dec!(-1.5), dec!(-1.5));

        assert_eq!(format_change(&up), "+5.00 (+5.00%)");
        assert_eq!(format_change(&down), "-1.50 (-1.50%)");
        assert_eq!(change_color(down.change()), Color::Red);
    }

    #[test]
    fn change_that_rounds_to_zero_is_neutral() {
        assert_eq!(format_signed(&dec!(-0.004)), "+0.00");
        assert_eq!(change_color(&dec!(-0.004)), Color::Green);
        assert_eq!(format_signed(&dec!(-0.006)), "-0.01");
        assert_eq!(change_color(&dec!(-0.006)), Color::Red);
    }
}
