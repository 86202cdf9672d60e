use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
};
use rust_decimal::Decimal;

use crate::models::Snapshot;

fn is_negative_at_display(value: &Decimal) -> bool {
    let rounded = value.round_dp(2);
    rounded.is_sign_negative() && !rounded.is_zero()
}

pub fn format_signed(value: &Decimal) -> String {
    let sign = if is_negative_at_display(value) { "-" } else { "+" };
    format!("{}{:.2}", sign, value.round_dp(2).abs())
}

/// `+5.00 (+5.00%)`
pub fn format_change(snapshot: &Snapshot) -> String {
    format!(
        "{} ({}%)",
        format_signed(snapshot.change()),
        format_signed(snapshot.change_percent())
    )
}

pub fn change_color(value: &Decimal) -> Color {
    if is_negative_at_display(value) {
        Color::Red
    } else {
        Color::Green
    }
}

pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
