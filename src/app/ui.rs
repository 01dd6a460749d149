use chrono::{DateTime, Local};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
};
use rust_decimal::Decimal;
use strum::IntoEnumIterator;

use crate::{
    app::{
        app::{FormState, InputField},
        utils::{format_amount, format_percent},
    },
    models::HoldingEntry,
};

pub fn render(
    frame: &mut Frame,
    entries: &[HoldingEntry],
    last_updated: Option<DateTime<Local>>,
    form: &FormState,
    table_state: &mut TableState,
    popup_message: &Option<String>,
    error_popup: &Option<String>,
    selection_mode: bool,
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

    let title = Paragraph::new("Investment Portfolio Tracker")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, chunks[0]);

    render_form(frame, form, chunks[1]);
    render_table(frame, entries, table_state, selection_mode, chunks[2]);
    render_footer(frame, last_updated, chunks[3]);

    if let Some(message) = error_popup {
        render_popup(frame, "Error", message, Color::Red);
    } else if let Some(message) = popup_message {
        render_popup(frame, "Status", message, Color::Cyan);
    }
}

fn render_form(frame: &mut Frame, form: &FormState, area: Rect) {
    let form_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .split(area);

    for (field, chunk) in InputField::iter().zip(form_chunks.iter()) {
        let focused = &field == form.focus();

        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let text = if focused {
            format!("{}█", form.value(field))
        } else {
            form.value(field).to_string()
        };

        let input = Paragraph::new(text).block(
            Block::default()
                .title(field.title())
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        frame.render_widget(input, *chunk);
    }
}

fn render_table(
    frame: &mut Frame,
    entries: &[HoldingEntry],
    table_state: &mut TableState,
    selection_mode: bool,
    area: Rect,
) {
    if entries.is_empty() {
        let empty_message = Paragraph::new("No lots yet. Fill the form and press Enter to add one.")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty_message, area);
        return;
    }

    let header_cells = [
        "Symbol",
        "Shares",
        "Buy Price",
        "Price",
        "Cost",
        "Mkt Value",
        "Gain",
        "Growth",
        "Div Rate",
        "Div Yield",
        "Div Income",
        "Industry",
        "Total Ret ($)",
        "Total Ret (%)",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).style(Style::default()).height(1);

    let rows = entries.iter().map(|entry| {
        let dividend_yield = *entry.dividend_yield() * Decimal::ONE_HUNDRED;

        let cells = [
            Cell::from(entry.symbol().clone()),
            Cell::from(entry.shares().to_string()),
            Cell::from(format!("{:.2}", entry.purchase_price())),
            Cell::from(format_amount(entry.current_price())),
            Cell::from(format!("{:.2}", entry.cost())),
            Cell::from(format_amount(entry.market_value())),
            Cell::from(format_amount(entry.dollar_gain())).style(gain_style(entry.dollar_gain())),
            Cell::from(format_percent(entry.growth())).style(gain_style(entry.growth())),
            Cell::from(format!("{:.2}", entry.dividend_rate())),
            Cell::from(format!("{:.2}%", dividend_yield)),
            Cell::from(format!("{:.2}", entry.dividend_income()))
                .style(Style::default().fg(Color::Green)),
            Cell::from(entry.industry().clone()),
            Cell::from(format_amount(entry.total_return()))
                .style(gain_style(entry.total_return())),
            Cell::from(format_percent(entry.total_return_percent()))
                .style(gain_style(entry.total_return_percent())),
        ];

        Row::new(cells).height(1)
    });

    let widths = [
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(11),
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Length(11),
        Constraint::Min(16),
        Constraint::Length(13),
        Constraint::Length(13),
    ];

    let highlight_style = if selection_mode {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("Holdings").borders(Borders::ALL))
        .row_highlight_style(highlight_style);

    frame.render_stateful_widget(table, area, table_state);
}

fn render_footer(frame: &mut Frame, last_updated: Option<DateTime<Local>>, area: Rect) {
    let mut footer = String::from("Tab: next field  Enter: add lot  Up/Down: select  Esc: quit");
    if let Some(updated) = last_updated {
        footer.push_str(&format!("  |  Prices as of {}", updated.format("%H:%M:%S")));
    }

    let help = Paragraph::new(footer).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

fn gain_style(value: &Option<Decimal>) -> Style {
    match value {
        Some(value) if *value >= Decimal::ZERO => Style::default().fg(Color::Green),
        Some(_) => Style::default().fg(Color::Red),
        None => Style::default().fg(Color::DarkGray),
    }
}

fn render_popup(frame: &mut Frame, title: &str, message: &str, color: Color) {
    let area = centered_rect(60, 20, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
