//! Terminal UI for the estimator form
//!
//! The form is drawn in a fixed-size frame centered in the terminal, the way
//! a non-resizable window would be. The result panel only takes up space once
//! there is a result; the error dialog is drawn over everything else.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::error::{INPUT_ERROR_MESSAGE, INPUT_ERROR_TITLE};
use crate::form::app::{Control, FormApp};
use crate::form::input::{Selector, TextField};

/// Window title
pub const WINDOW_TITLE: &str = "🏡 House Price Predictor";

/// Heading inside the window
pub const HEADING: &str = "🏠 House Price Predictor";

pub const FORM_WIDTH: u16 = 52;
pub const FORM_HEIGHT: u16 = 30;

const DIALOG_WIDTH: u16 = 46;
const DIALOG_HEIGHT: u16 = 7;

const ACCENT: Color = Color::Rgb(0x00, 0x7f, 0x5f);
const RESULT_FG: Color = Color::Rgb(0x06, 0x44, 0x20);
const RESULT_BG: Color = Color::Rgb(0xe0, 0xf8, 0xe0);

impl<M> FormApp<M> {
    /// Render the UI
    pub fn render(&self, f: &mut Frame) {
        let window = centered_rect(FORM_WIDTH, FORM_HEIGHT, f.area());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", WINDOW_TITLE));
        let inner = block.inner(window);
        f.render_widget(block, window);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Heading
                Constraint::Length(3), // Area
                Constraint::Length(3), // Bedrooms
                Constraint::Length(3), // Bathrooms
                Constraint::Length(3), // Age
                Constraint::Length(3), // Location
                Constraint::Length(3), // Parking
                Constraint::Length(3), // Button
                Constraint::Length(4), // Result panel
                Constraint::Min(0),
                Constraint::Length(1), // Key hints
            ])
            .split(inner);

        self.render_heading(f, chunks[0]);
        self.render_text_field(f, chunks[1], &self.area, Control::Area);
        self.render_text_field(f, chunks[2], &self.bedrooms, Control::Bedrooms);
        self.render_text_field(f, chunks[3], &self.bathrooms, Control::Bathrooms);
        self.render_text_field(f, chunks[4], &self.age, Control::Age);
        self.render_selector(f, chunks[5], &self.location, Control::Location);
        self.render_selector(f, chunks[6], &self.parking, Control::Parking);
        self.render_button(f, chunks[7]);
        if let Some(text) = &self.result {
            render_result(f, chunks[8], text);
        }
        render_hints(f, chunks[10]);

        if self.input_error.is_some() {
            render_error_dialog(f, window);
        }
    }

    fn render_heading(&self, f: &mut Frame, area: Rect) {
        let heading = Paragraph::new(Line::from(Span::styled(
            HEADING,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(heading, area);
    }

    fn render_text_field(&self, f: &mut Frame, area: Rect, field: &TextField, control: Control) {
        let focused = self.focus == control;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(field.label())
            .border_style(border_style(focused));

        f.render_widget(Paragraph::new(field.value()).block(block), area);

        if focused && !self.dialog_open() && area.width > 2 {
            let offset = (field.value().chars().count() as u16).min(area.width - 3);
            f.set_cursor_position(Position::new(area.x + 1 + offset, area.y + 1));
        }
    }

    fn render_selector(&self, f: &mut Frame, area: Rect, selector: &Selector, control: Control) {
        let focused = self.focus == control;
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!("{} ({})", selector.label(), selector.choices().join("/")))
            .border_style(border_style(focused));

        let value = match selector.selected_label() {
            "" => Span::styled("Select...", Style::default().fg(Color::DarkGray)),
            label => Span::raw(label),
        };
        let arrows = Style::default().fg(if focused { Color::Yellow } else { Color::DarkGray });
        let line = Line::from(vec![
            Span::styled("◀ ", arrows),
            value,
            Span::styled(" ▶", arrows),
        ]);

        f.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_button(&self, f: &mut Frame, area: Rect) {
        let focused = self.focus == Control::Submit;
        let style = if focused {
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        };

        let button = Paragraph::new(Span::styled(" Predict Price ", style))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style(focused)));
        f.render_widget(button, area);
    }
}

fn render_result(f: &mut Frame, area: Rect, text: &str) {
    let style = Style::default()
        .fg(RESULT_FG)
        .bg(RESULT_BG)
        .add_modifier(Modifier::BOLD);

    let panel = Paragraph::new(text.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(style),
        );
    f.render_widget(panel, area);
}

fn render_hints(f: &mut Frame, area: Rect) {
    let hints = Paragraph::new(Span::styled(
        "Tab move · ←→ choose · Enter predict · Esc quit",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    f.render_widget(hints, area);
}

fn render_error_dialog(f: &mut Frame, window: Rect) {
    let area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, window);

    let content = vec![
        Line::from(Span::styled(INPUT_ERROR_MESSAGE, Style::default().fg(Color::Red))),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )),
    ];

    let dialog = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(Color::Red))
                .title(Span::styled(
                    format!(" {} ", INPUT_ERROR_TITLE),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
        );

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

/// Rect of at most `width`×`height`, centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
