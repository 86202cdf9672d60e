use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Clear, Dataset, GraphType, Paragraph, Tabs, Wrap},
};
use rust_decimal::prelude::ToPrimitive;
use strum::IntoEnumIterator;

use crate::{
    app::utils::{centered_rect, change_color, format_change},
    models::LookbackPeriod,
    services::{Lookup, LookupOutcome},
};

const NO_DATA_MESSAGE: &str = "No stock data found. Please check the symbol and try again.";

pub fn render(
    frame: &mut Frame,
    input: &str,
    period: LookbackPeriod,
    outcome: &Option<LookupOutcome>,
    popup_message: &Option<String>,
    error_popup: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new("China Stock Recommendation & Live Market Data")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    render_search_bar(frame, chunks[1], input, period);

    match outcome {
        None => {
            let hint = Paragraph::new(
                "Type a symbol (e.g. 600519.SS or 000001.SZ), pick a period with ←/→ and press Enter to search.",
            )
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(hint, chunks[2]);
        }
        Some(LookupOutcome::NoData(symbol)) => {
            let notice = Paragraph::new(NO_DATA_MESSAGE)
                .style(Style::default().fg(Color::Yellow))
                .block(
                    Block::default()
                        .title(format!("Current Stock: {}", symbol))
                        .borders(Borders::ALL),
                );
            frame.render_widget(notice, chunks[2]);
        }
        Some(LookupOutcome::Failed(message)) => {
            let notice = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(notice, chunks[2]);
        }
        Some(LookupOutcome::Found(lookup)) => render_lookup(frame, chunks[2], lookup),
    }

    let footer = Paragraph::new(
        "Data source: Yahoo Finance (free public data, for demo only) | Enter: search  ←/→: period  Esc: quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[3]);

    if let Some(message) = popup_message {
        render_popup(frame, message, Color::Cyan);
    }

    if let Some(message) = error_popup {
        render_popup(frame, message, Color::Red);
    }
}

fn render_search_bar(frame: &mut Frame, area: Rect, input: &str, period: LookbackPeriod) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(42)])
        .split(area);

    let search = Paragraph::new(format!("{}_", input))
        .style(Style::default().fg(Color::White))
        .block(Block::default().title("Search a Stock").borders(Borders::ALL));
    frame.render_widget(search, chunks[0]);

    let selected = LookbackPeriod::iter()
        .position(|p| p == period)
        .unwrap_or_default();
    let tabs = Tabs::new(LookbackPeriod::iter().map(|p| p.to_str().to_string()))
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().title("Time period").borders(Borders::ALL));
    frame.render_widget(tabs, chunks[1]);
}

fn render_lookup(frame: &mut Frame, area: Rect, lookup: &Lookup) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(5),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let snapshot = lookup.snapshot();
    let metadata = lookup.metadata();

    let metric = Paragraph::new(vec![
        Line::from(format!("Current Price ({})", metadata.currency_sign())),
        Line::from(vec![
            Span::styled(
                format!("{:.2}  ", snapshot.price()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format_change(snapshot),
                Style::default().fg(change_color(snapshot.change())),
            ),
        ]),
    ])
    .block(
        Block::default()
            .title(format!("Current Stock: {}", lookup.symbol()))
            .borders(Borders::ALL),
    );
    frame.render_widget(metric, top[0]);

    let mut details = Vec::new();
    if let Some(name) = metadata.name() {
        details.push(Line::from(format!("Company: {}", name)));
    }
    if let Some(sector) = metadata.sector() {
        details.push(Line::from(format!("Sector: {}", sector)));
    }
    let details = Paragraph::new(details).block(Block::default().borders(Borders::ALL));
    frame.render_widget(details, top[1]);

    render_chart(frame, chunks[1], lookup);

    let recommendations: Vec<Line> = lookup
        .recommendations()
        .iter()
        .map(|r| {
            Line::from(vec![
                Span::styled(
                    format!("Recommended: {}  ", r.symbol()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(r.link().clone(), Style::default().fg(Color::Blue)),
            ])
        })
        .collect();
    let recommendations = Paragraph::new(recommendations).block(
        Block::default()
            .title("Similar Stock Recommendations")
            .borders(Borders::ALL),
    );
    frame.render_widget(recommendations, chunks[2]);
}

fn render_chart(frame: &mut Frame, area: Rect, lookup: &Lookup) {
    let points = lookup.history().points();
    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .filter_map(|(i, p)| Some((i as f64, p.close().to_f64()?)))
        .collect();

    let (min, max) = data.iter().fold((f64::MAX, f64::MIN), |(lo, hi), (_, y)| {
        (lo.min(*y), hi.max(*y))
    });
    let padding = ((max - min) * 0.05).max(0.01);

    let first_date = points
        .first()
        .map(|p| p.date().format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    let last_date = points
        .last()
        .map(|p| p.date().format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    let datasets = vec![
        Dataset::default()
            .name("Close")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&data),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!("Closing price ({})", lookup.period().label()))
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, (data.len().max(2) - 1) as f64])
                .labels(vec![Span::raw(first_date), Span::raw(last_date)]),
        )
        .y_axis(
            Axis::default()
                .bounds([min - padding, max + padding])
                .labels(vec![
                    Span::raw(format!("{:.2}", min)),
                    Span::raw(format!("{:.2}", max)),
                ]),
        );

    frame.render_widget(chart, area);
}

fn render_popup(frame: &mut Frame, message: &str, color: Color) {
    let area = centered_rect(60, 5, frame.area());
    let popup = Paragraph::new(message)
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
