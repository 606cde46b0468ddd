//! # List State Module
//!
//! This module contains the records behind the to-do and reward lists together
//! with the transient view state of the scrolling list that shows them.
//!
//! ## Responsibilities:
//! - Scroll offset, clamped to the records that exist
//! - Row selection and double-click detection
//! - The inline edit buffer
//! - Adding and removing records
//!
//! ## Purpose:
//! Keeping the list logic free of drawing code means every interaction can be
//! exercised in plain unit tests. The scrolling list component only maps
//! pointer positions to rows and paints the result.

use log::debug;
use shared::Record;

use crate::config::ListConfig;

/// Transient view state of a scrolling list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListViewState {
    /// Index of the first visible record
    pub offset: usize,
    /// Record highlighted with the green outline
    pub selected: Option<usize>,
    /// Record whose text is being edited
    pub editing: Option<usize>,
    /// Text typed so far for the record being edited
    pub edit_buffer: String,
    /// Time of the last accepted click, for double-click detection
    pub last_click_ms: Option<u64>,
}

/// What a click on a row did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Outside the visible rows or past the end of the list
    Ignored,
    /// Record selected and edit started
    StartedEdit(usize),
    /// Second click within the double-click window
    ToggledComplete(usize),
}

/// An ordered list of records plus the state of the view showing them
#[derive(Debug, Clone)]
pub struct RecordList<R> {
    records: Vec<R>,
    view: ListViewState,
    settings: ListConfig,
}

impl<R: Record> RecordList<R> {
    pub fn new(records: Vec<R>, settings: ListConfig) -> Self {
        Self {
            records,
            view: ListViewState::default(),
            settings,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [R] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn view(&self) -> &ListViewState {
        &self.view
    }

    pub fn settings(&self) -> &ListConfig {
        &self.settings
    }

    /// Forget selection, edit and scroll position
    pub fn reset_view(&mut self) {
        self.view = ListViewState::default();
    }

    /// Largest offset that still fills the viewport
    pub fn max_offset(&self) -> usize {
        self.records.len().saturating_sub(self.settings.max_items)
    }

    /// Records currently in the viewport, with their absolute index
    pub fn visible(&self) -> impl Iterator<Item = (usize, &R)> {
        self.records
            .iter()
            .enumerate()
            .skip(self.view.offset)
            .take(self.settings.max_items)
    }

    pub fn scroll_down(&mut self) {
        self.view.offset = (self.view.offset + self.settings.scroll_speed).min(self.max_offset());
        self.clear_selection();
    }

    pub fn scroll_up(&mut self) {
        self.view.offset = self.view.offset.saturating_sub(self.settings.scroll_speed);
        self.clear_selection();
    }

    /// Row under a point `y` points below the top of the list, if it is a visible row slot
    pub fn row_at(&self, y: f32) -> Option<usize> {
        let relative = y - self.settings.top_inset;
        if relative < 0.0 {
            return None;
        }

        let row = (relative / self.settings.row_height).floor() as usize;
        (row < self.settings.max_items).then_some(row)
    }

    /// Handle a click on a visible row.
    ///
    /// Double-clicks are detected from elapsed time alone: a second click within
    /// the threshold toggles whichever row it lands on.
    pub fn click_row(&mut self, row: usize, time_ms: u64) -> ClickOutcome {
        if row >= self.settings.max_items {
            return ClickOutcome::Ignored;
        }

        let index = row + self.view.offset;
        if index >= self.records.len() {
            return ClickOutcome::Ignored;
        }

        let is_double_click = self
            .view
            .last_click_ms
            .is_some_and(|last| time_ms.saturating_sub(last) <= self.settings.double_click_ms);
        self.view.last_click_ms = Some(time_ms);

        if is_double_click {
            self.records[index].toggle_complete();
            let complete = self.records[index].is_complete();
            debug!("✔️ Toggled record {} complete={}", index, complete);
            ClickOutcome::ToggledComplete(index)
        } else {
            self.view.selected = Some(index);
            self.start_edit(index);
            debug!("✏️ Editing record {}", index);
            ClickOutcome::StartedEdit(index)
        }
    }

    /// Start editing a record, pre-filling the buffer with its text
    pub fn start_edit(&mut self, index: usize) {
        if let Some(record) = self.records.get(index) {
            self.view.editing = Some(index);
            self.view.edit_buffer = record.text().to_string();
        }
    }

    /// Append typed characters to the edit buffer, up to the length cap
    pub fn type_text(&mut self, text: &str) {
        if self.view.editing.is_none() {
            return;
        }

        for ch in text.chars().filter(|c| !c.is_control()) {
            if self.view.edit_buffer.chars().count() >= self.settings.max_edit_len {
                break;
            }
            self.view.edit_buffer.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.view.editing.is_some() {
            self.view.edit_buffer.pop();
        }
    }

    /// Write the edit buffer back into the record. Returns false if nothing was being edited.
    pub fn commit_edit(&mut self) -> bool {
        let Some(index) = self.view.editing.take() else {
            return false;
        };

        let text = std::mem::take(&mut self.view.edit_buffer);
        if let Some(record) = self.records.get_mut(index) {
            record.set_text(text);
        }
        true
    }

    /// Append a new record and return its index
    pub fn add(&mut self, text: &str) -> usize {
        self.records.push(R::from_text(text));
        self.records.len() - 1
    }

    /// Remove the selected record, if any
    pub fn remove_selected(&mut self) -> Option<R> {
        let index = self.view.selected?;
        self.clear_selection();

        if index >= self.records.len() {
            return None;
        }

        let removed = self.records.remove(index);
        self.view.offset = self.view.offset.min(self.max_offset());
        Some(removed)
    }

    fn clear_selection(&mut self) {
        self.view.selected = None;
        self.view.editing = None;
        self.view.edit_buffer.clear();
    }
}
