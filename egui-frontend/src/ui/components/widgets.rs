//! # Widgets Module
//!
//! The capability interface shared by everything drawn on a screen, plus the
//! two plain widget types: text buttons and image buttons.
//!
//! ## Key Types:
//! - `Widget` - render / handle_input / update
//! - `RenderContext` - what a widget may look at while drawing
//! - `Button` - rounded, hover-highlighted text button
//! - `ImageButton` - artwork scaled to its rectangle
//!
//! Widgets never act on the app directly. A press that should do something
//! returns a [`Command`] which the app dispatches centrally.

use eframe::egui;

use crate::assets::{Assets, ImageAsset};
use crate::ui::commands::Command;
use crate::ui::input::InputEvent;
use crate::ui::state::RecordStore;

use super::styling::BODY_FONT_SIZE;
use super::theme::CURRENT_THEME;

/// Everything a widget needs to draw itself for one frame
pub struct RenderContext<'a> {
    pub painter: &'a egui::Painter,
    /// Full drawing area of the window
    pub canvas: egui::Rect,
    /// Current pointer position, for hover effects
    pub pointer: Option<egui::Pos2>,
    pub assets: &'a Assets,
    pub store: &'a RecordStore,
}

/// Common interface for all screen elements
pub trait Widget {
    /// Draw the widget in its current visual state
    fn render(&mut self, ctx: &RenderContext<'_>);

    /// React to one input event, optionally asking the app to do something
    fn handle_input(&mut self, event: &InputEvent, store: &mut RecordStore) -> Option<Command>;

    /// Per-frame update pass, `dt` in seconds
    fn update(&mut self, _dt: f32, _store: &RecordStore) {}

    /// Whether the widget needs continuous repaints
    fn is_animating(&self) -> bool {
        false
    }
}

/// True if `event` is a primary press inside `rect`
pub fn pressed_inside(event: &InputEvent, rect: egui::Rect) -> bool {
    event.press_pos().is_some_and(|pos| rect.contains(pos))
}

/// Colors and font of a text button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    pub fill: egui::Color32,
    pub hover_fill: egui::Color32,
    pub text_color: egui::Color32,
    pub font_size: f32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            fill: CURRENT_THEME.buttons.fill,
            hover_fill: CURRENT_THEME.buttons.hover_fill,
            text_color: CURRENT_THEME.buttons.text,
            font_size: BODY_FONT_SIZE,
        }
    }
}

impl ButtonStyle {
    /// Green style of the popup's confirm button
    pub fn confirm() -> Self {
        Self {
            fill: CURRENT_THEME.buttons.confirm_fill,
            hover_fill: CURRENT_THEME.buttons.confirm_hover_fill,
            text_color: CURRENT_THEME.buttons.confirm_text,
            font_size: BODY_FONT_SIZE,
        }
    }
}

/// Rounded text button that highlights while hovered
#[derive(Debug, Clone)]
pub struct Button {
    rect: egui::Rect,
    label: String,
    style: ButtonStyle,
    command: Option<Command>,
}

impl Button {
    pub fn new(
        rect: egui::Rect,
        label: impl Into<String>,
        style: ButtonStyle,
        command: Option<Command>,
    ) -> Self {
        Self {
            rect,
            label: label.into(),
            style,
            command,
        }
    }

    pub fn rect(&self) -> egui::Rect {
        self.rect
    }

    pub fn is_hovered(&self, pointer: Option<egui::Pos2>) -> bool {
        pointer.is_some_and(|pos| self.rect.contains(pos))
    }

    /// Command fired by `event`, if it is a press on this button
    pub fn press(&self, event: &InputEvent) -> Option<Command> {
        if pressed_inside(event, self.rect) {
            self.command.clone()
        } else {
            None
        }
    }

    /// Draw without a full render context; used by the modal popup
    pub fn paint(&self, painter: &egui::Painter, pointer: Option<egui::Pos2>) {
        let fill = if self.is_hovered(pointer) {
            self.style.hover_fill
        } else {
            self.style.fill
        };

        painter.rect_filled(self.rect, egui::Rounding::same(10.0), fill);
        painter.text(
            self.rect.center(),
            egui::Align2::CENTER_CENTER,
            &self.label,
            egui::FontId::new(self.style.font_size, egui::FontFamily::Proportional),
            self.style.text_color,
        );
    }
}

impl Widget for Button {
    fn render(&mut self, ctx: &RenderContext<'_>) {
        self.paint(ctx.painter, ctx.pointer);
    }

    fn handle_input(&mut self, event: &InputEvent, _store: &mut RecordStore) -> Option<Command> {
        self.press(event)
    }
}

/// Artwork drawn scaled to its rectangle, optionally clickable
#[derive(Debug, Clone)]
pub struct ImageButton {
    rect: egui::Rect,
    image: ImageAsset,
    command: Option<Command>,
}

impl ImageButton {
    pub fn new(rect: egui::Rect, image: ImageAsset, command: Option<Command>) -> Self {
        Self { rect, image, command }
    }

    /// Purely decorative image
    pub fn decoration(rect: egui::Rect, image: ImageAsset) -> Self {
        Self::new(rect, image, None)
    }
}

impl Widget for ImageButton {
    fn render(&mut self, ctx: &RenderContext<'_>) {
        if let Some(texture) = ctx.assets.texture(self.image) {
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            ctx.painter.image(texture.id(), self.rect, uv, egui::Color32::WHITE);
        }
    }

    fn handle_input(&mut self, event: &InputEvent, _store: &mut RecordStore) -> Option<Command> {
        if pressed_inside(event, self.rect) {
            self.command.clone()
        } else {
            None
        }
    }
}
