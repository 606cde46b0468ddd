//! # Styling Module
//!
//! Global egui style setup and the few drawing helpers shared by several
//! components (screen background, wrapped text blocks).
//!
//! ## Key Functions:
//! - `setup_garden_style()` - Configure global egui styling
//! - `draw_screen_background()` - Fill the canvas with the screen color
//! - `draw_centered_lines()` - Draw a block of lines centered inside a rect

use eframe::egui;

use super::theme::colors;

/// Font size of button labels, list rows and the popup text
pub const BODY_FONT_SIZE: f32 = 24.0;

/// Font size of the text inside bingo cells
pub const BINGO_FONT_SIZE: f32 = 12.0;

/// Setup UI styling for the entire application
pub fn setup_garden_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        // Every screen paints its own background
        style.visuals.window_fill = egui::Color32::TRANSPARENT;
        style.visuals.panel_fill = colors::SCREEN_BACKGROUND;

        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::new(BODY_FONT_SIZE, egui::FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            egui::FontId::new(BODY_FONT_SIZE, egui::FontFamily::Proportional),
        );

        style
    });
}

/// Fill the whole canvas with the screen background color
pub fn draw_screen_background(painter: &egui::Painter, canvas: egui::Rect) {
    painter.rect_filled(canvas, egui::Rounding::ZERO, colors::SCREEN_BACKGROUND);
}

/// Draw `text` line by line, each line centered horizontally, the block centered vertically
pub fn draw_centered_lines(
    painter: &egui::Painter,
    rect: egui::Rect,
    text: &str,
    font_size: f32,
    color: egui::Color32,
) {
    let font = egui::FontId::new(font_size, egui::FontFamily::Proportional);
    let lines: Vec<&str> = text.lines().collect();
    let line_height = painter.ctx().fonts(|fonts| fonts.row_height(&font));

    let total_height = line_height * lines.len() as f32;
    let mut y = rect.center().y - total_height / 2.0;

    for line in lines {
        painter.text(
            egui::pos2(rect.center().x, y),
            egui::Align2::CENTER_TOP,
            line,
            font.clone(),
            color,
        );
        y += line_height;
    }
}
