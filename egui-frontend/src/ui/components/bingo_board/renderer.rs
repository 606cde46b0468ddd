//! # Bingo Square Renderer

use eframe::egui;

use crate::ui::components::styling::{draw_centered_lines, BINGO_FONT_SIZE};
use crate::ui::components::theme::CURRENT_THEME;

use super::board::BingoSquare;

/// Green when marked, white otherwise, with a 2px border and the words stacked in the middle
pub fn draw_square(painter: &egui::Painter, square: &BingoSquare) {
    let colors = &CURRENT_THEME.bingo;
    let fill = if square.marked { colors.marked } else { colors.unmarked };

    painter.rect_filled(square.rect, egui::Rounding::ZERO, fill);
    painter.rect_stroke(square.rect, egui::Rounding::ZERO, egui::Stroke::new(2.0, colors.border));

    draw_centered_lines(
        &painter.with_clip_rect(square.rect),
        square.rect,
        &square.text,
        BINGO_FONT_SIZE,
        colors.text,
    );
}
