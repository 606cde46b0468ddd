//! # Screen Manager Module
//!
//! This module handles screen routing for the app.
//!
//! ## Key Types:
//! - `Screen` - an ordered group of widgets plus the persistent home button
//! - `ScreenManager` - name-keyed registry with at most one active screen
//!
//! ## Purpose:
//! Only the active screen is drawn, updated and given input. Before the first
//! `set_screen` call nothing is active and every operation is a no-op.

use std::collections::HashMap;

use log::debug;

use crate::ui::commands::Command;
use crate::ui::input::InputEvent;
use crate::ui::state::RecordStore;

use super::styling::draw_screen_background;
use super::widgets::{RenderContext, Widget};

/// A full-window UI state
pub struct Screen {
    widgets: Vec<Box<dyn Widget>>,
    home: Box<dyn Widget>,
}

impl Screen {
    pub fn new(widgets: Vec<Box<dyn Widget>>, home: Box<dyn Widget>) -> Self {
        Self { widgets, home }
    }

    /// Background, then widgets in order, then the home button on top
    pub fn render(&mut self, ctx: &RenderContext<'_>) {
        draw_screen_background(ctx.painter, ctx.canvas);
        for widget in &mut self.widgets {
            widget.render(ctx);
        }
        self.home.render(ctx);
    }

    /// Offer the event to every widget and collect the resulting commands in order
    pub fn handle_input(&mut self, event: &InputEvent, store: &mut RecordStore) -> Vec<Command> {
        let mut commands: Vec<Command> = self
            .widgets
            .iter_mut()
            .filter_map(|widget| widget.handle_input(event, store))
            .collect();

        if let Some(command) = self.home.handle_input(event, store) {
            commands.push(command);
        }
        commands
    }

    pub fn update(&mut self, dt: f32, store: &RecordStore) {
        for widget in &mut self.widgets {
            widget.update(dt, store);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.widgets.iter().any(|widget| widget.is_animating())
    }
}

/// Registry of named screens with one current selection
#[derive(Default)]
pub struct ScreenManager {
    screens: HashMap<String, Screen>,
    current: Option<String>,
}

impl ScreenManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a screen, replacing any previous one with the same name
    pub fn add_screen(&mut self, name: impl Into<String>, screen: Screen) {
        let name = name.into();
        debug!("📄 Registered screen '{}'", name);
        self.screens.insert(name, screen);
    }

    /// Make `name` the active screen. Unknown names leave the selection unchanged.
    pub fn set_screen(&mut self, name: &str) -> bool {
        if self.screens.contains_key(name) {
            self.current = Some(name.to_string());
            true
        } else {
            false
        }
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    fn current_mut(&mut self) -> Option<&mut Screen> {
        let name = self.current.as_ref()?;
        self.screens.get_mut(name)
    }

    pub fn render(&mut self, ctx: &RenderContext<'_>) {
        if let Some(screen) = self.current_mut() {
            screen.render(ctx);
        }
    }

    pub fn handle_input(&mut self, event: &InputEvent, store: &mut RecordStore) -> Vec<Command> {
        match self.current_mut() {
            Some(screen) => screen.handle_input(event, store),
            None => Vec::new(),
        }
    }

    pub fn update(&mut self, dt: f32, store: &RecordStore) {
        if let Some(screen) = self.current_mut() {
            screen.update(dt, store);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.current
            .as_ref()
            .and_then(|name| self.screens.get(name))
            .is_some_and(|screen| screen.is_animating())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageAsset;
    use crate::config::ListConfig;
    use crate::ui::commands::ScreenId;
    use crate::ui::components::widgets::{Button, ButtonStyle, ImageButton};
    use eframe::egui;

    fn home() -> Box<dyn Widget> {
        Box::new(ImageButton::new(
            egui::Rect::from_min_size(egui::pos2(5.0, 5.0), egui::vec2(50.0, 50.0)),
            ImageAsset::House,
            Some(Command::GoTo(ScreenId::Menu)),
        ))
    }

    fn button_screen(command: Command) -> Screen {
        let button = Button::new(
            egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0)),
            "Go",
            ButtonStyle::default(),
            Some(command),
        );
        Screen::new(vec![Box::new(button)], home())
    }

    fn press(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerPressed { pos: egui::pos2(x, y), time_ms: 0 }
    }

    #[test]
    fn test_no_screen_selected_is_noop() {
        let mut store = RecordStore::new(&ListConfig::default());
        let mut manager = ScreenManager::new();
        manager.add_screen("Menu", button_screen(Command::AddTask));

        assert_eq!(manager.current_name(), None);
        assert!(manager.handle_input(&press(50.0, 50.0), &mut store).is_empty());
        assert!(!manager.is_animating());
    }

    #[test]
    fn test_set_unknown_screen_is_noop() {
        let mut manager = ScreenManager::new();
        manager.add_screen("Menu", button_screen(Command::AddTask));

        assert!(manager.set_screen("Menu"));
        assert!(!manager.set_screen("Settings"));
        assert_eq!(manager.current_name(), Some("Menu"));
    }

    #[test]
    fn test_input_goes_to_active_screen_only() {
        let mut store = RecordStore::new(&ListConfig::default());
        let mut manager = ScreenManager::new();
        manager.add_screen("A", button_screen(Command::AddTask));
        manager.add_screen("B", button_screen(Command::AddReward));

        manager.set_screen("B");
        assert_eq!(manager.handle_input(&press(80.0, 80.0), &mut store), vec![Command::AddReward]);
    }

    #[test]
    fn test_home_button_reported_after_widgets() {
        let mut store = RecordStore::new(&ListConfig::default());
        let mut screen = button_screen(Command::AddTask);

        // Inside both the button and the home image
        let commands = screen.handle_input(&press(20.0, 20.0), &mut store);
        assert_eq!(commands, vec![Command::AddTask, Command::GoTo(ScreenId::Menu)]);
    }
}
