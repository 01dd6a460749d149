use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use derive_getters::Getters;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::{
    api::MarketDataProvider,
    app::{Portfolio, ui, utils},
};

#[derive(Clone, Copy, Debug, Default, EnumIter, Eq, PartialEq)]
pub enum InputField {
    #[default]
    Symbol,
    Shares,
    PurchasePrice,
}

impl InputField {
    pub fn title(&self) -> &'static str {
        match self {
            InputField::Symbol => "Symbol",
            InputField::Shares => "Shares",
            InputField::PurchasePrice => "Purchase Price",
        }
    }
}

/// Raw text of the three input boxes plus which one has focus. Character
/// filtering happens here, per field: this is the widget-level enforcement
/// the calculator relies on for non-negative numeric input.
#[derive(Debug, Default, Getters)]
pub struct FormState {
    symbol: String,
    shares: String,
    purchase_price: String,
    focus: InputField,
}

impl FormState {
    pub fn value(&self, field: InputField) -> &str {
        match field {
            InputField::Symbol => &self.symbol,
            InputField::Shares => &self.shares,
            InputField::PurchasePrice => &self.purchase_price,
        }
    }

    fn value_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::Symbol => &mut self.symbol,
            InputField::Shares => &mut self.shares,
            InputField::PurchasePrice => &mut self.purchase_price,
        }
    }

    pub fn set_focus(&mut self, field: InputField) {
        self.focus = field;
    }

    pub fn push_char(&mut self, c: char) {
        let focus = self.focus;
        match focus {
            InputField::Symbol => {
                if (c.is_ascii_alphanumeric() || c == '.' || c == '-') && self.symbol.len() < 10 {
                    self.symbol.push(c.to_ascii_uppercase());
                }
            }
            InputField::Shares | InputField::PurchasePrice => {
                let value = self.value_mut(focus);
                if value.len() >= 15 {
                    return;
                }
                if c.is_ascii_digit() || (c == '.' && !value.contains('.')) {
                    value.push(c);
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        let focus = self.focus;
        self.value_mut(focus).pop();
    }

    pub fn clear(&mut self) {
        self.symbol.clear();
        self.shares.clear();
        self.purchase_price.clear();
    }
}

pub struct App<P: MarketDataProvider> {
    portfolio: Portfolio<P>,
    form: FormState,
    table_state: TableState,
    popup_message: Option<String>,
    error_popup: Option<String>,
    selection_mode: bool,
}

impl<P: MarketDataProvider> App<P> {
    pub fn new(portfolio: Portfolio<P>) -> Self {
        Self {
            portfolio,
            form: FormState::default(),
            table_state: TableState::default(),
            popup_message: None,
            error_popup: None,
            selection_mode: false,
        }
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

    fn focus_next(&mut self) {
        let fields: Vec<InputField> = InputField::iter().collect();
        let i = fields
            .iter()
            .position(|field| field == self.form.focus())
            .unwrap_or(0);
        self.form.set_focus(fields[(i + 1) % fields.len()]);
    }

    fn focus_prev(&mut self) {
        let fields: Vec<InputField> = InputField::iter().collect();
        let i = fields
            .iter()
            .position(|field| field == self.form.focus())
            .unwrap_or(0);
        self.form.set_focus(fields[(i + fields.len() - 1) % fields.len()]);
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

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|frame| {
                ui::render(
                    frame,
                    self.portfolio.entries(),
                    self.portfolio.last_updated(),
                    &self.form,
                    &mut self.table_state,
                    &self.popup_message,
                    &self.error_popup,
                    self.selection_mode,
                )
            })?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Popups are modal
                if self.popup_message.is_some() || self.error_popup.is_some() {
                    if let KeyCode::Enter | KeyCode::Esc = key.code {
                        self.clear_popup();
                        self.clear_error_popup();
                    }
                    continue;
                }

                match key.code {
                    KeyCode::Esc => {
                        if self.selection_mode {
                            self.selection_mode = false;
                            self.table_state.select(None);
                        } else {
                            return Ok(());
                        }
                    }
                    KeyCode::Tab => self.focus_next(),
                    KeyCode::BackTab => self.focus_prev(),
                    KeyCode::Backspace => self.form.backspace(),
                    KeyCode::Enter => {
                        let symbol = self.form.symbol().trim().to_uppercase();
                        if !utils::is_valid_symbol(&symbol) {
                            self.show_error_popup(&format!(
                                "'{}' is not a valid ticker symbol",
                                symbol
                            ));
                            continue;
                        }

                        let shares = match utils::parse_non_negative(self.form.shares(), "Shares") {
                            Ok(value) => value,
                            Err(err) => {
                                self.show_error_popup(&format!("{:#}", err));
                                continue;
                            }
                        };

                        let purchase_price = match utils::parse_non_negative(
                            self.form.purchase_price(),
                            "Purchase price",
                        ) {
                            Ok(value) => value,
                            Err(err) => {
                                self.show_error_popup(&format!("{:#}", err));
                                continue;
                            }
                        };

                        self.selection_mode = false;
                        self.table_state.select(None);
                        self.show_popup(&format!("Fetching market data for {}...", symbol));
                        terminal.draw(|frame| {
                            ui::render(
                                frame,
                                self.portfolio.entries(),
                                self.portfolio.last_updated(),
                                &self.form,
                                &mut self.table_state,
                                &self.popup_message,
                                &self.error_popup,
                                self.selection_mode,
                            )
                        })?;

                        let entry = self.portfolio.add_lot(&symbol, shares, purchase_price).await;

                        self.clear_popup();
                        self.form.clear();

                        if entry.current_price().is_none() {
                            self.show_popup(&format!(
                                "No market data for {}; lot added with cost only",
                                symbol
                            ));
                        }
                    }
                    KeyCode::Down => {
                        self.selection_mode = true;
                        let entries = self.portfolio.entries();
                        if !entries.is_empty() {
                            let i = match self.table_state.selected() {
                                Some(i) => {
                                    if i >= entries.len() - 1 {
                                        0
                                    } else {
                                        i + 1
                                    }
                                }
                                None => 0,
                            };
                            self.table_state.select(Some(i));
                        }
                    }
                    KeyCode::Up => {
                        self.selection_mode = true;
                        let entries = self.portfolio.entries();
                        if !entries.is_empty() {
                            let i = match self.table_state.selected() {
                                Some(i) => {
                                    if i == 0 {
                                        entries.len() - 1
                                    } else {
                                        i - 1
                                    }
                                }
                                None => 0,
                            };
                            self.table_state.select(Some(i));
                        }
                    }
                    KeyCode::Char(c) => self.form.push_char(c),
                    _ => {}
                }
            }
        }
    }
}
