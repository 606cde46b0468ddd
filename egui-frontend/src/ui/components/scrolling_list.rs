//! # Scrolling List Component
//!
//! Draws a [`RecordList`] as a fixed viewport of rows and feeds it pointer and
//! keyboard input. One widget type serves both lists; the reward variant also
//! strikes through completed rows.
//!
//! ## Interaction:
//! - Up/Down arrows scroll
//! - Click a row to select and edit it, double-click to toggle completion
//! - Type to edit, Backspace to delete, Enter to save

use eframe::egui;
use shared::Record;

use crate::config::ListConfig;
use crate::ui::commands::Command;
use crate::ui::input::{InputEvent, KeyInput};
use crate::ui::state::{ClickOutcome, RecordList, RecordStore};

use super::theme::CURRENT_THEME;
use super::widgets::{RenderContext, Widget};

/// Font size of row text
pub const ROW_FONT_SIZE: f32 = 20.0;

/// Which list of the store a [`ScrollingList`] shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Tasks,
    Rewards,
}

/// Scrollable, editable view over one record list
#[derive(Debug, Clone)]
pub struct ScrollingList {
    rect: egui::Rect,
    kind: ListKind,
}

impl ScrollingList {
    pub fn new(rect: egui::Rect, kind: ListKind) -> Self {
        Self { rect, kind }
    }

    pub fn tasks(rect: egui::Rect) -> Self {
        Self::new(rect, ListKind::Tasks)
    }

    pub fn rewards(rect: egui::Rect) -> Self {
        Self::new(rect, ListKind::Rewards)
    }
}

impl Widget for ScrollingList {
    fn render(&mut self, ctx: &RenderContext<'_>) {
        match self.kind {
            ListKind::Tasks => draw_list(ctx.painter, self.rect, &ctx.store.tasks, false),
            ListKind::Rewards => draw_list(ctx.painter, self.rect, &ctx.store.rewards, true),
        }
    }

    fn handle_input(&mut self, event: &InputEvent, store: &mut RecordStore) -> Option<Command> {
        match self.kind {
            ListKind::Tasks => handle_list_input(&mut store.tasks, self.rect, event),
            ListKind::Rewards => handle_list_input(&mut store.rewards, self.rect, event),
        };
        None
    }
}

/// Apply one input event to a list shown in `rect`
pub fn handle_list_input<R: Record>(
    list: &mut RecordList<R>,
    rect: egui::Rect,
    event: &InputEvent,
) -> Option<ClickOutcome> {
    match event {
        InputEvent::Key(KeyInput::Down) => list.scroll_down(),
        InputEvent::Key(KeyInput::Up) => list.scroll_up(),
        InputEvent::Key(KeyInput::Enter) => {
            list.commit_edit();
        }
        InputEvent::Key(KeyInput::Backspace) => list.backspace(),
        InputEvent::Text(text) => list.type_text(text),
        InputEvent::PointerPressed { pos, time_ms } if rect.contains(*pos) => {
            let row = list.row_at(pos.y - rect.top())?;
            return Some(list.click_row(row, *time_ms));
        }
        InputEvent::PointerPressed { .. } => {}
    }
    None
}

/// Rectangle of the visible row slot `slot` (0 = top row)
pub fn row_rect(list_rect: egui::Rect, settings: &ListConfig, slot: usize) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            list_rect.left() + 10.0,
            list_rect.top() + settings.top_inset + slot as f32 * settings.row_height,
        ),
        egui::vec2(list_rect.width() - 20.0, settings.row_height),
    )
}

fn draw_list<R: Record>(
    painter: &egui::Painter,
    rect: egui::Rect,
    list: &RecordList<R>,
    strike_completed: bool,
) {
    let colors = &CURRENT_THEME.list;
    let settings = list.settings();
    let view = list.view();
    let font = egui::FontId::new(ROW_FONT_SIZE, egui::FontFamily::Proportional);

    painter.rect_filled(rect, egui::Rounding::ZERO, colors.background);

    for (slot, (index, record)) in list.visible().enumerate() {
        let row = row_rect(rect, settings, slot);
        let text_color = if record.is_complete() {
            colors.complete_text
        } else {
            colors.text
        };

        painter.rect_filled(row, egui::Rounding::ZERO, colors.row_background);
        painter.with_clip_rect(row).text(
            row.left_center(),
            egui::Align2::LEFT_CENTER,
            record.text(),
            font.clone(),
            text_color,
        );

        if strike_completed && record.is_complete() {
            painter.line_segment(
                [row.left_center(), row.right_center()],
                egui::Stroke::new(2.0, text_color),
            );
        }

        if view.selected == Some(index) {
            let outline = egui::Stroke::new(3.0, colors.selected_outline);
            painter.rect_stroke(row, egui::Rounding::ZERO, outline);
        }
    }

    // Edit box overlays the row being edited
    if let Some(editing) = view.editing {
        if editing >= view.offset && editing - view.offset < settings.max_items {
            let edit_box = row_rect(rect, settings, editing - view.offset);
            painter.rect_filled(edit_box, egui::Rounding::ZERO, colors.row_background);
            painter.with_clip_rect(edit_box).text(
                edit_box.left_center(),
                egui::Align2::LEFT_CENTER,
                &view.edit_buffer,
                font,
                colors.text,
            );
            let outline = egui::Stroke::new(3.0, colors.selected_outline);
            painter.rect_stroke(edit_box, egui::Rounding::ZERO, outline);
        }
    }
}
