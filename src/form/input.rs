//! Form controls: single-line text fields and fixed-choice selectors

use crate::estimator::EncodingTable;

/// Longest value a text field accepts
pub const MAX_INPUT_LEN: usize = 24;

/// Single-line text box with a label
#[derive(Debug, Clone)]
pub struct TextField {
    label: &'static str,
    value: String,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().take(MAX_INPUT_LEN).collect();
    }

    pub fn push(&mut self, c: char) {
        if !c.is_control() && self.value.chars().count() < MAX_INPUT_LEN {
            self.value.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }
}

/// Dropdown restricted to the labels of one encoding table
///
/// Starts with nothing selected.
#[derive(Debug, Clone)]
pub struct Selector {
    label: &'static str,
    table: &'static EncodingTable,
    selected: Option<usize>,
}

impl Selector {
    pub fn new(label: &'static str, table: &'static EncodingTable) -> Self {
        Self {
            label,
            table,
            selected: None,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn choices(&self) -> &'static [&'static str] {
        self.table.labels()
    }

    /// Selected label, or `""` when nothing is selected
    pub fn selected_label(&self) -> &'static str {
        self.selected
            .and_then(|idx| self.choices().get(idx).copied())
            .unwrap_or("")
    }

    pub fn select_next(&mut self) {
        let len = self.choices().len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1) % len,
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        let len = self.choices().len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(idx) => idx - 1,
        });
    }

    /// Select by label; returns false (and leaves the selection alone) for
    /// labels outside the table
    pub fn select(&mut self, label: &str) -> bool {
        match self.choices().iter().position(|l| *l == label) {
            Some(idx) => {
                self.selected = Some(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}
