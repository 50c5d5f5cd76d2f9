//! Form state and event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info, warn};

use crate::error::InputError;
use crate::estimator::{PriceModel, LOCATION, PARKING};
use crate::form::input::{Selector, TextField};
use crate::format::format_result;
use crate::request::PredictionRequest;

/// Focusable controls, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Area,
    Bedrooms,
    Bathrooms,
    Age,
    Location,
    Parking,
    Submit,
}

impl Control {
    pub const ORDER: [Control; 7] = [
        Control::Area,
        Control::Bedrooms,
        Control::Bathrooms,
        Control::Age,
        Control::Location,
        Control::Parking,
        Control::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

/// What one press of "Predict Price" produced
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Estimated(f64),
    Rejected(InputError),
}

/// Application state for the estimator form
pub struct FormApp<M> {
    model: M,
    currency_symbol: String,
    pub area: TextField,
    pub bedrooms: TextField,
    pub bathrooms: TextField,
    pub age: TextField,
    pub location: Selector,
    pub parking: Selector,
    pub focus: Control,
    /// Result panel text; the panel is hidden while this is `None`
    pub result: Option<String>,
    /// Cause of the last rejected submission; the error dialog is open while
    /// this is `Some`
    pub input_error: Option<InputError>,
}

impl<M> FormApp<M> {
    pub fn dialog_open(&self) -> bool {
        self.input_error.is_some()
    }

    pub fn result_visible(&self) -> bool {
        self.result.is_some()
    }
}

impl<M: PriceModel> FormApp<M> {
    /// Create a new form around a fitted model
    pub fn new(model: M, currency_symbol: impl Into<String>) -> Self {
        Self {
            model,
            currency_symbol: currency_symbol.into(),
            area: TextField::new("Area (in sqft)"),
            bedrooms: TextField::new("Number of Bedrooms"),
            bathrooms: TextField::new("Number of Bathrooms"),
            age: TextField::new("Age of Property (Years)"),
            location: Selector::new("Location", &LOCATION),
            parking: Selector::new("Parking", &PARKING),
            focus: Control::Area,
            result: None,
            input_error: None,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Snapshot of the current field contents
    pub fn request(&self) -> PredictionRequest {
        PredictionRequest {
            area: self.area.value().to_string(),
            bedrooms: self.bedrooms.value().to_string(),
            bathrooms: self.bathrooms.value().to_string(),
            age: self.age.value().to_string(),
            location: self.location.selected_label().to_string(),
            parking: self.parking.selected_label().to_string(),
        }
    }

    /// Validate the current fields and, if they pass, estimate a price
    ///
    /// Invalid fields open the error dialog without reaching the model. An
    /// estimate that overflows to infinity opens it too. An earlier result
    /// stays on screen.
    pub fn submit(&mut self) -> SubmitOutcome {
        let estimate = self.request().validate().and_then(|features| {
            let price = self.model.predict(&features);
            if !price.is_finite() {
                warn!(price, ?features, "Estimate is not a finite number");
                return Err(InputError::NonFiniteEstimate);
            }
            if price < 0.0 {
                warn!(price, ?features, "Estimate is outside the plausible range");
            }
            Ok(price)
        });

        match estimate {
            Ok(price) => {
                info!(price, "Estimated house price");

                self.result = Some(format_result(&self.currency_symbol, price));
                SubmitOutcome::Estimated(price)
            }
            Err(e) => {
                debug!(field = ?e.field(), error = %e, "Rejected prediction request");
                self.input_error = Some(e.clone());
                SubmitOutcome::Rejected(e)
            }
        }
    }

    /// Handle keyboard input; returns true when the form should close
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        // The dialog is modal
        if self.dialog_open() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.input_error = None;
            }
            return false;
        }

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => {
                if self.focus == Control::Submit {
                    self.submit();
                } else {
                    self.focus = self.focus.next();
                }
            }
            KeyCode::Left => {
                if let Some(selector) = self.focused_selector() {
                    selector.select_prev();
                }
            }
            KeyCode::Right => {
                if let Some(selector) = self.focused_selector() {
                    selector.select_next();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.focused_text_field() {
                    field.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.focused_text_field() {
                    if !key.modifiers.contains(KeyModifiers::CONTROL) {
                        field.push(c);
                    }
                } else if c == ' ' {
                    if let Some(selector) = self.focused_selector() {
                        selector.select_next();
                    } else if self.focus == Control::Submit {
                        self.submit();
                    }
                }
            }
            _ => {}
        }

        false
    }

    fn focused_text_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            Control::Area => Some(&mut self.area),
            Control::Bedrooms => Some(&mut self.bedrooms),
            Control::Bathrooms => Some(&mut self.bathrooms),
            Control::Age => Some(&mut self.age),
            _ => None,
        }
    }

    fn focused_selector(&mut self) -> Option<&mut Selector> {
        match self.focus {
            Control::Location => Some(&mut self.location),
            Control::Parking => Some(&mut self.parking),
            _ => None,
        }
    }
}
