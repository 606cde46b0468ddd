//! # Input Module
//!
//! Translates the raw egui event stream into the small set of input events the
//! screens and widgets react to. Keeping widgets on this enum instead of
//! `egui::Event` lets their behaviour be tested without a running context.

use eframe::egui;

/// Keys with a meaning in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Up,
    Down,
    Enter,
    Backspace,
}

/// A single user input, in screen coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary mouse button went down
    PointerPressed { pos: egui::Pos2, time_ms: u64 },
    Key(KeyInput),
    /// Printable characters typed by the user
    Text(String),
}

impl InputEvent {
    /// Position of a primary press, if this is one
    pub fn press_pos(&self) -> Option<egui::Pos2> {
        match self {
            InputEvent::PointerPressed { pos, .. } => Some(*pos),
            _ => None,
        }
    }
}

/// Collect this frame's relevant input events, in order
pub fn collect_input_events(ctx: &egui::Context) -> Vec<InputEvent> {
    ctx.input(|i| {
        let time_ms = (i.time * 1000.0) as u64;
        i.events
            .iter()
            .filter_map(|event| translate_event(event, time_ms))
            .collect()
    })
}

/// Map one egui event to an [`InputEvent`], dropping everything else
pub fn translate_event(event: &egui::Event, time_ms: u64) -> Option<InputEvent> {
    match event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            ..
        } => Some(InputEvent::PointerPressed { pos: *pos, time_ms }),
        egui::Event::Key {
            key,
            pressed: true,
            repeat: false,
            ..
        } => {
            let key = match key {
                egui::Key::ArrowUp => KeyInput::Up,
                egui::Key::ArrowDown => KeyInput::Down,
                egui::Key::Enter => KeyInput::Enter,
                egui::Key::Backspace => KeyInput::Backspace,
                _ => return None,
            };
            Some(InputEvent::Key(key))
        }
        egui::Event::Text(text) if !text.is_empty() => Some(InputEvent::Text(text.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(key: egui::Key, pressed: bool, repeat: bool) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat,
            modifiers: egui::Modifiers::NONE,
        }
    }

    #[test]
    fn test_primary_press_translated() {
        let event = egui::Event::PointerButton {
            pos: egui::pos2(12.0, 34.0),
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        };
        assert_eq!(
            translate_event(&event, 500),
            Some(InputEvent::PointerPressed { pos: egui::pos2(12.0, 34.0), time_ms: 500 })
        );
    }

    #[test]
    fn test_release_and_secondary_ignored() {
        let release = egui::Event::PointerButton {
            pos: egui::pos2(1.0, 1.0),
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::NONE,
        };
        let secondary = egui::Event::PointerButton {
            pos: egui::pos2(1.0, 1.0),
            button: egui::PointerButton::Secondary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        };
        assert_eq!(translate_event(&release, 0), None);
        assert_eq!(translate_event(&secondary, 0), None);
    }

    #[test]
    fn test_keys_translated() {
        assert_eq!(
            translate_event(&key_event(egui::Key::ArrowDown, true, false), 0),
            Some(InputEvent::Key(KeyInput::Down))
        );
        assert_eq!(
            translate_event(&key_event(egui::Key::Enter, true, false), 0),
            Some(InputEvent::Key(KeyInput::Enter))
        );
        assert_eq!(translate_event(&key_event(egui::Key::Enter, false, false), 0), None);
        assert_eq!(translate_event(&key_event(egui::Key::ArrowUp, true, true), 0), None);
        assert_eq!(translate_event(&key_event(egui::Key::Tab, true, false), 0), None);
    }

    #[test]
    fn test_text_translated() {
        let event = egui::Event::Text("a".to_string());
        assert_eq!(translate_event(&event, 0), Some(InputEvent::Text("a".to_string())));
        assert_eq!(translate_event(&egui::Event::Text(String::new()), 0), None);
    }

    #[test]
    fn test_press_pos() {
        let press = InputEvent::PointerPressed { pos: egui::pos2(5.0, 6.0), time_ms: 0 };
        assert_eq!(press.press_pos(), Some(egui::pos2(5.0, 6.0)));
        assert_eq!(InputEvent::Key(KeyInput::Up).press_pos(), None);
    }
}
