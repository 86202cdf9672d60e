use std::io;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tracing::info;

use crate::{
    api::MarketDataProvider,
    app::ui,
    models::LookbackPeriod,
    services::{LookupOutcome, StockLookupService},
};

#[derive(Debug, PartialEq)]
pub enum KeyAction {
    Quit,
    Search,
    Redraw,
}

pub struct App<P> {
    service: StockLookupService<P, StdRng>,
    input: String,
    period: LookbackPeriod,
    outcome: Option<LookupOutcome>,
    popup_message: Option<String>,
    error_popup: Option<String>,
}

impl<P: MarketDataProvider> App<P> {
    pub fn new(
        service: StockLookupService<P, StdRng>,
        symbol: &str,
        period: LookbackPeriod,
    ) -> Self {
        Self {
            service,
            input: symbol.to_string(),
            period,
            outcome: None,
            popup_message: None,
            error_popup: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn period(&self) -> LookbackPeriod {
        self.period
    }

    pub fn outcome(&self) -> &Option<LookupOutcome> {
        &self.outcome
    }

    pub fn error_popup(&self) -> &Option<String> {
        &self.error_popup
    }

    fn show_popup(&mut self, message: &str) {
        self.popup_message = Some(message.to_string());
    }

    fn clear_popup(&mut self) {
        self.popup_message = None;
    }

    fn show_error_popup(&mut self, message: &str) {
        self.error_popup = Some(message.to_string());
    }

    fn clear_error_popup(&mut self) {
        self.error_popup = None;
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|frame| {
            ui::render(
                frame,
                &self.input,
                self.period,
                &self.outcome,
                &self.popup_message,
                &self.error_popup,
            )
        })?;
        Ok(())
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.draw(terminal)?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match self.handle_key(key) {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Redraw => {}
                    KeyAction::Search => {
                        self.show_popup(&format!("Fetching {}...", self.input.trim()));
                        self.draw(terminal)?;
                        self.search().await;
                        self.clear_popup();
                    }
                }
            }
        }
    }

    /// Only Enter starts a lookup; editing the symbol or the period never does.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if self.error_popup.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.clear_error_popup();
            }
            return KeyAction::Redraw;
        }

        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Enter => KeyAction::Search,
            KeyCode::Left => {
                self.period = self.period.previous();
                KeyAction::Redraw
            }
            KeyCode::Right | KeyCode::Tab => {
                self.period = self.period.next();
                KeyAction::Redraw
            }
            KeyCode::Backspace => {
                self.input.pop();
                KeyAction::Redraw
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
                KeyAction::Redraw
            }
            _ => KeyAction::Redraw,
        }
    }

    pub async fn search(&mut self) {
        info!(input = %self.input, period = %self.period, "Search requested");
        let outcome = self.service.lookup(&self.input, self.period).await;

        if let LookupOutcome::Failed(message) = &outcome {
            self.show_error_popup(message);
        }

        self.outcome = Some(outcome);
    }
}
